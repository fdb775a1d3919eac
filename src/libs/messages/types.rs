#[derive(Debug, Clone)]
pub enum Message {
    // === DOCUMENT MESSAGES ===
    DocumentCreated(String), // path
    DocumentNotBound,
    DocumentExists(String), // path
    NodesHeader(String),             // path
    NodesMatching(String, String),   // field, query
    NoNodesFound,
    NoNodesMatching(String, String), // field, query

    // === NODE MESSAGES ===
    NodeAdded(i64),
    NodeUpdated(i64),
    NodeDeleted(i64),
    NodeNotFound(i64),
    NodeActivated(i64),
    NodeDeactivated(i64),
    FileAttached(i64, String), // id, path
    NoChangesDetected,
    ConfirmDeleteNode(i64),
    DeletionCancelled,
    InvalidField(String),

    // === EDITOR MESSAGES ===
    NoFileAttached(i64),
    EditorLaunched(String),     // command line
    EditorLaunchFailed(String), // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleEditor,
    PromptEditor,
    PromptPruneOnSave,
}
