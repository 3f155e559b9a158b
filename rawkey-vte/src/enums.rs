#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    #[default]
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    CsiIgnore,
    DcsEntry,
    DcsParam,
    DcsIntermediate,
    DcsPassthrough,
    DcsIgnore,
    OscString,
    SosPmApcString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Ignore,
    Print,
    Execute,
    Clear,
    Collect,
    Param,
    EscDispatch,
    CsiDispatch,
    Hook,
    Put,
    Unhook,
    OscStart,
    OscPut,
    OscEnd,
}

/// Pending single-shift introduced by `ESC N` / `ESC O`.
///
/// The latch re-routes the next printable through the G2/G3 callbacks and
/// is reset by `clear` together with the rest of the per-sequence scratch.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SingleShift {
    #[default]
    None,
    Two,
    Three,
}
