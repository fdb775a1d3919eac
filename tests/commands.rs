#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;
    use taskedit::commands::Cli;
    use taskedit::db::task_file_path;
    use taskedit::db::tasks::Tasks;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Commands read the config from the data directory under HOME.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CommandTestContext { temp_dir }
        }
    }

    fn run(args: &[&str]) -> anyhow::Result<()> {
        let mut argv = vec!["taskedit"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().run()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_node_commands() {
        assert!(Cli::try_parse_from(["taskedit", "new", "work.task"]).is_ok());
        assert!(Cli::try_parse_from(["taskedit", "new", "work.task", "--force"]).is_ok());
        assert!(Cli::try_parse_from([
            "taskedit", "add", "work.task", "--note", "Plan sprint", "--priority", "-1", "--status", "inactive", "--info",
            "see line 40",
        ])
        .is_ok());
        assert!(Cli::try_parse_from(["taskedit", "edit", "work.task", "3", "-n", "changed"]).is_ok());
        assert!(Cli::try_parse_from(["taskedit", "list", "work.task", "--by", "priority", "--query", "2"]).is_ok());
        assert!(Cli::try_parse_from(["taskedit", "delete", "work.task", "3", "--yes"]).is_ok());
        assert!(Cli::try_parse_from(["taskedit", "attach", "work.task", "3", "notes.md"]).is_ok());
        assert!(Cli::try_parse_from(["taskedit", "open", "work.task", "3"]).is_ok());
        assert!(Cli::try_parse_from(["taskedit", "toggle", "work.task", "0"]).is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        // Status only accepts active/inactive
        assert!(Cli::try_parse_from(["taskedit", "add", "work.task", "--status", "done"]).is_err());
        // Ids are integers
        assert!(Cli::try_parse_from(["taskedit", "show", "work.task", "first"]).is_err());
        // A subcommand is required
        assert!(Cli::try_parse_from(["taskedit"]).is_err());
    }

    #[test]
    fn test_task_file_path_adds_extension() {
        assert_eq!(task_file_path("work"), PathBuf::from("work.task"));
        assert_eq!(task_file_path("work.task"), PathBuf::from("work.task"));
        assert_eq!(task_file_path("notes.db"), PathBuf::from("notes.db"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_then_delete_removes_row_from_file(ctx: &mut CommandTestContext) {
        let bare = ctx.temp_dir.path().join("work");
        let path = ctx.temp_dir.path().join("work.task");
        let path_arg = path.to_str().unwrap();

        run(&["new", bare.to_str().unwrap()]).unwrap();
        assert!(path.exists());
        // A second `new` without --force refuses to overwrite
        assert!(run(&["new", path_arg]).is_err());

        run(&["add", path_arg, "--note", "first", "--priority", "2"]).unwrap();
        run(&["add", path_arg, "--note", "second"]).unwrap();
        let ids: Vec<i64> = Tasks::load(&path).unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        run(&["delete", path_arg, "1", "--yes"]).unwrap();

        let nodes = Tasks::load(&path).unwrap();
        let ids: Vec<i64> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(nodes[1].note, "second");

        // Unknown ids are reported without touching the file
        assert!(run(&["delete", path_arg, "7", "--yes"]).is_err());
        assert_eq!(Tasks::load(&path).unwrap().len(), 2);
    }
}
