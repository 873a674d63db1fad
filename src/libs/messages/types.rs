use crate::libs::task::TaskView;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // title
    TaskUpdated(String), // title
    TaskDeleted(String), // title
    TaskCompleted(String),
    TaskReopened(String),
    TaskNotFound(String),  // id or prefix
    TaskIdAmbiguous(String), // prefix
    TaskTitleEmpty,
    TaskAlreadyCompleted(String),
    TaskAlreadyOpen(String),
    ConfirmDeleteTask(String), // title
    DeleteCancelled,
    NoChangesDetected,
    InvalidDueDate(String), // raw input
    EditingTask(String),    // title

    // === VIEW MESSAGES ===
    ViewHeader(TaskView, usize), // view, count
    EmptyView(TaskView),
    PreviewHeader(usize),  // shown count
    PreviewMore(usize),    // hidden count
    OverdueSummary(usize), // overdue count

    // === FOCUS MODE MESSAGES ===
    FocusModeActivated,
    FocusModeActivatedHint,
    FocusModeDeactivated,
    FocusModeDeactivatedHint,
    FocusModeStatus(bool),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNothingToDelete,
    ConfigModuleDisplay,
    PromptSelectModules,
    PromptDefaultView,
    PromptShowPreview,
    PromptPreviewLimit,

    // === TASK PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskPriority,

    // === DATABASE MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error
    DatabaseUpToDate,
    StoreValueCorrupted(String), // key
}
