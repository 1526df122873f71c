/// Every key press resolves to at most one Action. The UI never touches the
/// filesystem directly; transitions turn actions into [`crate::Command`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Movement
    MoveSelection(i32),
    MoveTop,
    MoveBottom,
    PageUp,
    PageDown,

    // Browsing
    Open,
    Edit,
    PromptNewFile,
    RequestDelete,
    Quit,

    // New-file prompt
    InputPush(char),
    InputPop,
    InputLeft,
    InputRight,
    InputSubmit,
    InputCancel,

    // Delete confirmation
    ConfirmDelete,
    CancelDelete,
}
