use crate::content::Catalog;

/// Which project the modal is showing, and which of its images is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { project_id: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMsg {
    Open(String),
    Close,
    Next,
    Prev,
    Select(usize),
}

impl ModalState {
    /// Applies one user action. Image counts come from the catalog, which
    /// guarantees every project has at least one image.
    pub fn apply(&mut self, msg: ModalMsg, catalog: &Catalog) {
        match msg {
            ModalMsg::Open(project_id) => {
                if catalog.find(&project_id).is_none() {
                    log::warn!("ignoring open for unknown project {project_id}");
                    return;
                }
                log::debug!("opening project {project_id}");
                *self = ModalState::Open {
                    project_id,
                    index: 0,
                };
            }
            ModalMsg::Close => {
                *self = ModalState::Closed;
            }
            ModalMsg::Next | ModalMsg::Prev | ModalMsg::Select(_) => {
                let ModalState::Open { project_id, index } = self else {
                    return;
                };
                let count = match catalog.find(project_id.as_str()) {
                    Some(p) if !p.images.is_empty() => p.images.len(),
                    _ => return,
                };
                *index = match msg {
                    ModalMsg::Next => next_index(*index, count),
                    ModalMsg::Prev => prev_index(*index, count),
                    ModalMsg::Select(j) if j < count => j,
                    _ => return,
                };
                log::debug!("project {project_id} showing image {}/{count}", *index + 1);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn project_id(&self) -> Option<&str> {
        match self {
            ModalState::Open { project_id, .. } => Some(project_id),
            ModalState::Closed => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            ModalState::Open { index, .. } => Some(*index),
            ModalState::Closed => None,
        }
    }
}

// `count` is always > 0 here
fn next_index(index: usize, count: usize) -> usize {
    (index + 1) % count
}

fn prev_index(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::record;

    fn catalog() -> Catalog {
        Catalog::new(vec![record("a", 5, &[]), record("b", 1, &[])]).unwrap()
    }

    fn opened(id: &str, catalog: &Catalog) -> ModalState {
        let mut state = ModalState::default();
        state.apply(ModalMsg::Open(id.to_string()), catalog);
        state
    }

    #[test]
    fn test_open_resets_index() {
        let catalog = catalog();
        for p in catalog.projects() {
            let state = opened(&p.id, &catalog);
            assert_eq!(state.project_id(), Some(p.id.as_str()));
            assert_eq!(state.index(), Some(0));
        }

        // switching projects while open also starts from the first image
        let mut state = opened("a", &catalog);
        state.apply(ModalMsg::Select(3), &catalog);
        state.apply(ModalMsg::Open("b".to_string()), &catalog);
        assert_eq!(
            state,
            ModalState::Open {
                project_id: "b".to_string(),
                index: 0
            }
        );
    }

    #[test]
    fn test_open_unknown_project_is_ignored() {
        let catalog = catalog();
        let mut state = ModalState::Closed;
        state.apply(ModalMsg::Open("nope".to_string()), &catalog);
        assert_eq!(state, ModalState::Closed);

        let mut state = opened("a", &catalog);
        state.apply(ModalMsg::Next, &catalog);
        state.apply(ModalMsg::Open("nope".to_string()), &catalog);
        assert_eq!(state.project_id(), Some("a"));
        assert_eq!(state.index(), Some(1));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let catalog = catalog();
        let mut state = opened("a", &catalog);
        state.apply(ModalMsg::Select(4), &catalog);
        state.apply(ModalMsg::Next, &catalog);
        assert_eq!(state.index(), Some(0));
        state.apply(ModalMsg::Prev, &catalog);
        assert_eq!(state.index(), Some(4));
        state.apply(ModalMsg::Prev, &catalog);
        assert_eq!(state.index(), Some(3));
    }

    #[test]
    fn test_index_helpers_match_modular_arithmetic() {
        for count in 1..7 {
            for i in 0..count {
                assert_eq!(next_index(i, count), (i + 1) % count);
                assert_eq!(prev_index(i, count), (i + count - 1) % count);
            }
        }
    }

    #[test]
    fn test_select_in_and_out_of_range() {
        let catalog = catalog();
        let mut state = opened("a", &catalog);
        state.apply(ModalMsg::Select(2), &catalog);
        assert_eq!(state.index(), Some(2));
        state.apply(ModalMsg::Select(5), &catalog);
        assert_eq!(state.index(), Some(2));
        state.apply(ModalMsg::Select(usize::MAX), &catalog);
        assert_eq!(state.index(), Some(2));
        state.apply(ModalMsg::Select(0), &catalog);
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn test_close_then_reopen() {
        let catalog = catalog();
        let mut state = opened("a", &catalog);
        state.apply(ModalMsg::Select(3), &catalog);
        state.apply(ModalMsg::Close, &catalog);
        assert_eq!(state, ModalState::Closed);
        assert!(!state.is_open());

        // closing twice is fine
        state.apply(ModalMsg::Close, &catalog);
        assert_eq!(state, ModalState::Closed);

        state.apply(ModalMsg::Open("a".to_string()), &catalog);
        assert!(state.is_open());
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let catalog = catalog();
        let mut state = ModalState::Closed;
        for msg in [ModalMsg::Next, ModalMsg::Prev, ModalMsg::Select(0)] {
            state.apply(msg, &catalog);
            assert_eq!(state, ModalState::Closed);
        }
        assert_eq!(state.project_id(), None);
        assert_eq!(state.index(), None);
    }

    #[test]
    fn test_full_cycle_and_single_image_fixed_point() {
        let catalog = catalog();

        let mut state = opened("a", &catalog);
        let mut seen = vec![];
        for _ in 0..5 {
            state.apply(ModalMsg::Next, &catalog);
            seen.push(state.index().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);

        let mut state = opened("b", &catalog);
        state.apply(ModalMsg::Next, &catalog);
        assert_eq!(state.index(), Some(0));
        state.apply(ModalMsg::Prev, &catalog);
        assert_eq!(state.index(), Some(0));
        state.apply(ModalMsg::Select(1), &catalog);
        assert_eq!(state.index(), Some(0));
    }
}
