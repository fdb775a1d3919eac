#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskedit::db::tasks::{SaveMode, Tasks};
    use taskedit::libs::error::NodeError;
    use taskedit::libs::field::Field;
    use taskedit::libs::node::{Node, NodeUpdate};
    use taskedit::libs::session::{Session, SessionState};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        other_path: PathBuf,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("work.task");
            let other_path = temp_dir.path().join("home.task");
            SessionTestContext {
                _temp_dir: temp_dir,
                path,
                other_path,
            }
        }
    }

    #[test]
    fn test_new_session_has_one_blank_node() {
        let session = Session::new();

        assert_eq!(session.state(), SessionState::Unbound);
        assert_eq!(session.store().list(), vec![Node::with_id(0)]);
    }

    #[test]
    fn test_save_without_path_is_unbound() {
        let session = Session::new();

        assert!(matches!(session.save(), Err(NodeError::Unbound)));
        assert!(matches!(session.save_with(SaveMode::Prune), Err(NodeError::Unbound)));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_save_as_binds_and_save_writes(ctx: &mut SessionTestContext) {
        let mut session = Session::new();
        session.store_mut().update(0, &NodeUpdate::new().note("first")).unwrap();

        session.save_as(&ctx.path).unwrap();
        assert_eq!(session.state(), SessionState::Bound(ctx.path.as_path()));

        let id = session.store_mut().create().unwrap().id;
        session.store_mut().update(id, &NodeUpdate::new().priority(5)).unwrap();
        session.save().unwrap();

        let loaded = Tasks::load(&ctx.path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].note, "first");
        assert_eq!(loaded[1].priority, 5);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_replaces_store(ctx: &mut SessionTestContext) {
        let nodes = vec![
            Node {
                note: "a".to_string(),
                ..Node::with_id(0)
            },
            Node {
                note: "c".to_string(),
                ..Node::with_id(2)
            },
        ];
        Tasks::save(&ctx.path, &nodes, SaveMode::Merge).unwrap();

        let mut session = Session::new();
        session.store_mut().create().unwrap();
        session.open(&ctx.path).unwrap();

        assert_eq!(session.store().list(), nodes);
        assert_eq!(session.path(), Some(ctx.path.as_path()));
        // New ids continue after the largest loaded id
        assert_eq!(session.store_mut().create().unwrap().id, 3);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_failed_open_keeps_previous_state(ctx: &mut SessionTestContext) {
        let mut session = Session::new();
        session.store_mut().update(0, &NodeUpdate::new().note("unsaved")).unwrap();
        session.save_as(&ctx.path).unwrap();

        fs::write(&ctx.other_path, "garbage").unwrap();
        assert!(session.open(&ctx.other_path).is_err());

        assert_eq!(session.path(), Some(ctx.path.as_path()));
        assert_eq!(session.store().get(0).unwrap().note, "unsaved");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_new_document_unbinds(ctx: &mut SessionTestContext) {
        let mut session = Session::new();
        session.store_mut().create().unwrap();
        session.save_as(&ctx.path).unwrap();

        let blank = session.new_document();

        assert_eq!(blank, Node::with_id(0));
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.state(), SessionState::Unbound);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_save_as_moves_binding(ctx: &mut SessionTestContext) {
        let mut session = Session::new();
        session.save_as(&ctx.path).unwrap();
        session.save_as(&ctx.other_path).unwrap();

        assert_eq!(session.path(), Some(ctx.other_path.as_path()));
        assert_eq!(Tasks::load(&ctx.other_path).unwrap(), vec![Node::with_id(0)]);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_delete_reaches_disk_only_when_pruning(ctx: &mut SessionTestContext) {
        let mut session = Session::new();
        session.store_mut().create().unwrap();
        session.store_mut().create().unwrap();
        session.save_as(&ctx.path).unwrap();

        session.store_mut().delete(1).unwrap();
        session.save().unwrap();
        assert_eq!(Tasks::load(&ctx.path).unwrap().len(), 3);

        session.save_with(SaveMode::Prune).unwrap();
        let ids: Vec<i64> = Tasks::load(&ctx.path).unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_prune_save_mode(ctx: &mut SessionTestContext) {
        let mut session = Session::with_save_mode(SaveMode::Prune);
        session.store_mut().create().unwrap();
        session.save_as(&ctx.path).unwrap();

        session.store_mut().delete(0).unwrap();
        session.save().unwrap();

        let reopened = Session::open_path(&ctx.path, SaveMode::Prune).unwrap();
        assert_eq!(reopened.store().list(), vec![Node::with_id(1)]);
    }

    #[test]
    fn test_view_sorts_and_filters() {
        let mut session = Session::new();
        for priority in [3, 1, 2] {
            let id = session.store_mut().create().unwrap().id;
            session.store_mut().update(id, &NodeUpdate::new().priority(priority)).unwrap();
        }

        let priorities: Vec<i64> = session.view(Field::Priority, "").iter().map(|n| n.priority).collect();
        assert_eq!(priorities, vec![0, 1, 2, 3]);

        let matching = session.view(Field::Priority, "2");
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, 3);
    }
}
