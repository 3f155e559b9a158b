//! Transition helpers for the `rawkey-vte` finite state machine.
//!
//! The parser is driven by a table of state transitions that mirrors the
//! DEC/ECMA-48 specification. Each function in this module is responsible for
//! a specific parser state: given an input code point it returns the next
//! [`State`] and the [`Action`] the controller should perform. The global
//! [`anywhere`] table is consulted before any per-state function and always
//! forces a state change, which keeps C0/C1 aborts uniform across the
//! control-sequence families (ESC, CSI, DCS, OSC, SOS/PM/APC).
//!
//! Input arrives as Unicode scalar values rather than raw bytes: the stream
//! feeding this machine has already been decoded, so code points above 0xFF
//! are plain printables and never part of a sequence.

use crate::enums::{Action, State};

/// Transition that applies from any state when processing C1 controls and
/// common single-byte sequences.
///
/// A hit always runs the change-state protocol, even when the target equals
/// the current state, so entry actions such as `clear` re-run.
#[inline(always)]
pub(crate) const fn anywhere(code: u32) -> Option<(Action, State)> {
    use Action::*;
    use State::*;

    match code {
        0x18 | 0x1a | 0x80..=0x8f | 0x91..=0x97 | 0x99 | 0x9a => {
            Some((Execute, Ground))
        },
        0x9c => Some((Ignore, Ground)),
        0x1b => Some((Ignore, Escape)),
        0x9b => Some((Ignore, CsiEntry)),
        0x90 => Some((Ignore, DcsEntry)),
        0x9d => Some((Ignore, OscString)),
        0x98 | 0x9e | 0x9f => Some((Ignore, SosPmApcString)),
        _ => core::option::Option::None,
    }
}

/// Ground state passing printable data through.
///
/// C0 controls that survive the anywhere table are printables here: this is
/// an input parser, so a ^A typed at the keyboard must reach the consumer.
#[inline(always)]
const fn ground(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x7f | 0x100.. => (Ground, Print),
        _ => (Ground, None),
    }
}

/// ESC state waiting for the next code point to identify the sequence family.
#[inline(always)]
const fn escape(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f => (Escape, Execute),
        0x20..=0x2f => (EscapeIntermediate, Collect),
        0x50 => (DcsEntry, None),
        0x58 | 0x5e | 0x5f => (SosPmApcString, None),
        0x5b => (CsiEntry, None),
        0x5d => (OscString, None),
        0x30..=0x7e => (Ground, EscDispatch),
        0x7f => (Escape, Ignore),
        _ => (Escape, None),
    }
}

/// ESC state that collects intermediate bytes before dispatch.
#[inline(always)]
const fn escape_intermediate(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f => (EscapeIntermediate, Execute),
        0x20..=0x2f => (EscapeIntermediate, Collect),
        0x30..=0x7e => (Ground, EscDispatch),
        0x7f => (EscapeIntermediate, Ignore),
        _ => (EscapeIntermediate, None),
    }
}

/// CSI entry point that validates and routes subsequent parameter bytes.
#[inline(always)]
const fn csi_entry(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f => (CsiEntry, Execute),
        0x20..=0x2f => (CsiIntermediate, Collect),
        // A colon is not a legal first parameter byte; the sequence is junk.
        0x3a => (CsiIgnore, None),
        0x30..=0x39 | 0x3b => (CsiParam, Param),
        0x3c..=0x3f => (CsiParam, Collect),
        0x40..=0x7e => (Ground, CsiDispatch),
        0x7f => (CsiEntry, Ignore),
        _ => (CsiEntry, None),
    }
}

/// CSI parameter collection handling numeric fields and separators.
#[inline(always)]
const fn csi_param(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f => (CsiParam, Execute),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x30..=0x39 | 0x3b => (CsiParam, Param),
        0x3a | 0x3c..=0x3f => (CsiIgnore, None),
        0x40..=0x7e => (Ground, CsiDispatch),
        0x7f => (CsiParam, Ignore),
        _ => (CsiParam, None),
    }
}

/// CSI intermediate state collecting extra bytes prior to dispatch.
#[inline(always)]
const fn csi_intermediate(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f => (CsiIntermediate, Execute),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x30..=0x3f => (CsiIgnore, None),
        0x40..=0x7e => (Ground, CsiDispatch),
        0x7f => (CsiIntermediate, Ignore),
        _ => (CsiIntermediate, None),
    }
}

/// CSI ignore state consuming the remainder of a malformed sequence.
#[inline(always)]
const fn csi_ignore(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f => (CsiIgnore, Execute),
        0x20..=0x3f | 0x7f => (CsiIgnore, Ignore),
        0x40..=0x7e => (Ground, None),
        _ => (CsiIgnore, None),
    }
}

/// DCS entry point collecting the introducer and preparing parameters.
#[inline(always)]
const fn dcs_entry(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f | 0x7f => (DcsEntry, Ignore),
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x3a => (DcsIgnore, None),
        0x30..=0x39 | 0x3b => (DcsParam, Param),
        0x3c..=0x3f => (DcsParam, Collect),
        0x40..=0x7e => (DcsPassthrough, None),
        _ => (DcsEntry, None),
    }
}

/// DCS parameter collection equivalent to `csi_param` but for DCS strings.
#[inline(always)]
const fn dcs_param(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f | 0x7f => (DcsParam, Ignore),
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x30..=0x39 | 0x3b => (DcsParam, Param),
        0x3a | 0x3c..=0x3f => (DcsIgnore, None),
        0x40..=0x7e => (DcsPassthrough, None),
        _ => (DcsParam, None),
    }
}

/// DCS intermediate handler prior to entering passthrough mode.
#[inline(always)]
const fn dcs_intermediate(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f | 0x7f => (DcsIntermediate, Ignore),
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x30..=0x3f => (DcsIgnore, None),
        0x40..=0x7e => (DcsPassthrough, None),
        _ => (DcsIntermediate, None),
    }
}

/// DCS passthrough mode forwarding payload to the hooked handler.
#[inline(always)]
const fn dcs_passthrough(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x7e => (DcsPassthrough, Put),
        0x7f => (DcsPassthrough, Ignore),
        _ => (DcsPassthrough, None),
    }
}

/// DCS ignore state swallowing the remainder of a malformed string.
#[inline(always)]
const fn dcs_ignore(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x7f => (DcsIgnore, Ignore),
        _ => (DcsIgnore, None),
    }
}

/// OSC payload collection until ST is observed.
#[inline(always)]
const fn osc_string(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x1f => (OscString, Ignore),
        0x20..=0x7f => (OscString, OscPut),
        _ => (OscString, None),
    }
}

/// SOS/PM/APC string collection mirroring OSC but fully discarded.
#[inline(always)]
const fn sos_pm_apc_string(code: u32) -> (State, Action) {
    use Action::*;
    use State::*;

    match code {
        0x00..=0x7f => (SosPmApcString, Ignore),
        _ => (SosPmApcString, None),
    }
}

/// Action to trigger upon entering a new state before reading the next code.
#[inline(always)]
pub(crate) const fn entry_action(state: State) -> Action {
    use Action::*;
    use State::*;

    match state {
        Escape => Clear,
        CsiEntry => Clear,
        DcsEntry => Clear,
        DcsPassthrough => Hook,
        OscString => OscStart,
        _ => None,
    }
}

/// Action to trigger after leaving a state, typically to finalize buffers.
#[inline(always)]
pub(crate) const fn exit_action(state: State) -> Action {
    use Action::*;
    use State::*;

    match state {
        DcsPassthrough => Unhook,
        OscString => OscEnd,
        _ => None,
    }
}

/// Core transition table that delegates to state-specific helpers.
#[inline(always)]
pub(crate) const fn transit(state: State, code: u32) -> (State, Action) {
    use State::*;

    match state {
        Ground => ground(code),
        Escape => escape(code),
        EscapeIntermediate => escape_intermediate(code),
        CsiEntry => csi_entry(code),
        CsiParam => csi_param(code),
        CsiIntermediate => csi_intermediate(code),
        CsiIgnore => csi_ignore(code),
        DcsEntry => dcs_entry(code),
        DcsParam => dcs_param(code),
        DcsIntermediate => dcs_intermediate(code),
        DcsPassthrough => dcs_passthrough(code),
        DcsIgnore => dcs_ignore(code),
        OscString => osc_string(code),
        SosPmApcString => sos_pm_apc_string(code),
    }
}
