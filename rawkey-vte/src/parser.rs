use crate::actor::Actor;
use crate::enums::{Action, SingleShift, State};
use crate::transitions;

const MAX_INTERMEDIATES: usize = 2;

#[derive(Debug, Default)]
struct Intermediates {
    items: [u8; MAX_INTERMEDIATES],
    idx: usize,
    ignored_excess: bool,
}

impl Intermediates {
    fn get(&self) -> &[u8] {
        &self.items[..self.idx]
    }

    fn collect(&mut self, byte: u8) {
        if self.idx < MAX_INTERMEDIATES {
            self.items[self.idx] = byte;
            self.idx += 1;
        } else {
            self.ignored_excess = true;
        }
    }

    fn clear(&mut self) {
        self.items = Default::default();
        self.idx = 0;
        self.ignored_excess = false;
    }
}

/// Table-dispatched DEC ANSI parser for decoded terminal input.
///
/// The parser owns the per-sequence scratch state: the accumulators for
/// private markers, parameters and intermediates, plus the single-shift
/// latch. One parser decodes one stream; sharing a parser between streams
/// interleaves their sequences.
///
/// Characters are fed in one at a time through [`Parser::advance`] and
/// decoded events are surfaced through the [`Actor`] callbacks. The
/// accumulators are cleared on entry to `escape`, `csi_entry` and
/// `dcs_entry`, so the fields seen by `csi_dispatch` belong to exactly one
/// sequence.
#[derive(Default)]
pub struct Parser {
    state: State,
    private_markers: Vec<u8>,
    intermediates: Intermediates,
    params: Vec<u8>,
    single_shift: SingleShift,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine with one decoded character.
    ///
    /// The anywhere table is consulted first; a hit runs its action and then
    /// the change-state protocol, even when the target state equals the
    /// current one. Otherwise the current state's transition function
    /// decides, and the state only changes when it names a different state.
    pub fn advance<A: Actor>(&mut self, c: char, actor: &mut A) {
        let code = c as u32;

        if let Some((action, next)) = transitions::anywhere(code) {
            self.perform(action, c, actor);
            self.change_state(next, actor);
            return;
        }

        let (next, action) = transitions::transit(self.state, code);
        self.perform(action, c, actor);

        if next != self.state {
            self.change_state(next, actor);
        }
    }

    /// Advance the state machine with every character of `input`.
    pub fn advance_str<A: Actor>(&mut self, input: &str, actor: &mut A) {
        for c in input.chars() {
            self.advance(c, actor);
        }
    }

    /// Whether the parser sits on a bare ESC waiting for the next character
    /// to disambiguate a standalone Escape key from a longer sequence.
    #[inline]
    #[must_use]
    pub fn pending_escape(&self) -> bool {
        self.state == State::Escape
    }

    /// Resolve a pending ESC as a standalone key press.
    ///
    /// Runs the regular change-state protocol back to ground. Emitting the
    /// Escape character itself is left to the caller, which knows whether
    /// the wait ended in a timeout or in upstream exhaustion.
    pub fn abort_escape<A: Actor>(&mut self, actor: &mut A) {
        if self.pending_escape() {
            self.change_state(State::Ground, actor);
        }
    }

    fn change_state<A: Actor>(&mut self, next: State, actor: &mut A) {
        self.perform(transitions::exit_action(self.state), '\0', actor);
        self.perform(transitions::entry_action(next), '\0', actor);
        self.state = next;
    }

    fn perform<A: Actor>(&mut self, action: Action, c: char, actor: &mut A) {
        use Action::*;

        match action {
            None | Ignore => {},
            Print => self.print(c, actor),
            Execute => actor.execute(c as u8),
            Clear => self.clear(),
            Collect => self.collect(c as u8),
            Param => self.param(c as u8),
            EscDispatch => self.esc_dispatch(c, actor),
            CsiDispatch => self.csi_dispatch(c, actor),
            Hook => actor.hook(),
            Put => actor.put(c as u8),
            Unhook => actor.unhook(),
            OscStart => actor.osc_start(),
            OscPut => actor.osc_put(c),
            OscEnd => actor.osc_end(),
        }
    }

    fn print<A: Actor>(&mut self, c: char, actor: &mut A) {
        match std::mem::take(&mut self.single_shift) {
            SingleShift::None => actor.print(c),
            SingleShift::Two => actor.single_shift2(c),
            SingleShift::Three => actor.single_shift3(c),
        }
    }

    fn clear(&mut self) {
        self.private_markers.clear();
        self.intermediates.clear();
        self.params.clear();
        self.single_shift = SingleShift::None;
    }

    fn collect(&mut self, byte: u8) {
        match byte {
            0x20..=0x2f => self.intermediates.collect(byte),
            0x3a | 0x3c..=0x3f => self.private_markers.push(byte),
            _ => debug_assert!(false, "collect out of range: {byte:#04x}"),
        }
    }

    fn param(&mut self, byte: u8) {
        debug_assert!(matches!(byte, 0x30..=0x39 | 0x3b));
        self.params.push(byte);
    }

    fn esc_dispatch<A: Actor>(&mut self, c: char, actor: &mut A) {
        match c {
            // Single shifts are resolved here instead of being surfaced:
            // the latch re-routes the next printable.
            'N' => self.single_shift = SingleShift::Two,
            'O' => self.single_shift = SingleShift::Three,
            _ => actor.esc_dispatch(self.intermediates.get(), c as u8),
        }
    }

    fn csi_dispatch<A: Actor>(&mut self, c: char, actor: &mut A) {
        actor.csi_dispatch(
            &self.private_markers,
            &self.params,
            self.intermediates.get(),
            self.intermediates.ignored_excess,
            c as u8,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum ActorEvents {
        Print(char),
        SingleShift2(char),
        SingleShift3(char),
        Execute(u8),
        EscDispatch {
            intermediates: Vec<u8>,
            byte: u8,
        },
        CsiDispatch {
            private_markers: Vec<u8>,
            params: Vec<u8>,
            intermediates: Vec<u8>,
            ignored_excess_intermediates: bool,
            byte: u8,
        },
        Hook,
        Put(u8),
        Unhook,
        OscStart,
        OscPut(char),
        OscEnd,
    }

    #[derive(Default)]
    struct CollectingActor {
        actions: Vec<ActorEvents>,
    }

    impl Actor for CollectingActor {
        fn print(&mut self, c: char) {
            self.actions.push(ActorEvents::Print(c));
        }

        fn single_shift2(&mut self, c: char) {
            self.actions.push(ActorEvents::SingleShift2(c));
        }

        fn single_shift3(&mut self, c: char) {
            self.actions.push(ActorEvents::SingleShift3(c));
        }

        fn execute(&mut self, byte: u8) {
            self.actions.push(ActorEvents::Execute(byte));
        }

        fn esc_dispatch(&mut self, intermediates: &[u8], byte: u8) {
            self.actions.push(ActorEvents::EscDispatch {
                intermediates: intermediates.to_vec(),
                byte,
            });
        }

        fn csi_dispatch(
            &mut self,
            private_markers: &[u8],
            params: &[u8],
            intermediates: &[u8],
            ignored_excess_intermediates: bool,
            byte: u8,
        ) {
            self.actions.push(ActorEvents::CsiDispatch {
                private_markers: private_markers.to_vec(),
                params: params.to_vec(),
                intermediates: intermediates.to_vec(),
                ignored_excess_intermediates,
                byte,
            });
        }

        fn hook(&mut self) {
            self.actions.push(ActorEvents::Hook);
        }

        fn put(&mut self, byte: u8) {
            self.actions.push(ActorEvents::Put(byte));
        }

        fn unhook(&mut self) {
            self.actions.push(ActorEvents::Unhook);
        }

        fn osc_start(&mut self) {
            self.actions.push(ActorEvents::OscStart);
        }

        fn osc_put(&mut self, c: char) {
            self.actions.push(ActorEvents::OscPut(c));
        }

        fn osc_end(&mut self) {
            self.actions.push(ActorEvents::OscEnd);
        }
    }

    fn parse(input: &str) -> Vec<ActorEvents> {
        let mut parser = Parser::new();
        let mut actor = CollectingActor::default();
        parser.advance_str(input, &mut actor);
        actor.actions
    }

    fn csi(
        private_markers: &[u8],
        params: &[u8],
        intermediates: &[u8],
        byte: u8,
    ) -> ActorEvents {
        ActorEvents::CsiDispatch {
            private_markers: private_markers.to_vec(),
            params: params.to_vec(),
            intermediates: intermediates.to_vec(),
            ignored_excess_intermediates: false,
            byte,
        }
    }

    #[test]
    fn parses_printable_ascii() {
        assert_eq!(
            parse("test"),
            vec![
                ActorEvents::Print('t'),
                ActorEvents::Print('e'),
                ActorEvents::Print('s'),
                ActorEvents::Print('t'),
            ]
        );
    }

    #[test]
    fn prints_c0_controls_in_ground() {
        // Keyboard input: ^M, ^J and ^I are data for the consumer.
        assert_eq!(
            parse("\r\n\t"),
            vec![
                ActorEvents::Print('\r'),
                ActorEvents::Print('\n'),
                ActorEvents::Print('\t'),
            ]
        );
    }

    #[test]
    fn prints_unicode_beyond_latin1() {
        assert_eq!(parse("\u{1234}"), vec![ActorEvents::Print('\u{1234}')]);
    }

    #[test]
    fn drops_latin1_high_range_in_ground() {
        assert_eq!(parse("\u{a0}\u{e9}\u{ff}"), vec![]);
    }

    #[test]
    fn dispatches_csi_with_param() {
        assert_eq!(parse("\x1b[1@"), vec![csi(b"", b"1", b"", b'@')]);
    }

    #[test]
    fn dispatches_csi_with_private_marker() {
        assert_eq!(parse("\x1b[?1J"), vec![csi(b"?", b"1", b"", b'J')]);
    }

    #[test]
    fn dispatches_csi_with_lowercase_final() {
        assert_eq!(parse("\x1b[1a"), vec![csi(b"", b"1", b"", b'a')]);
    }

    #[test]
    fn keeps_params_as_raw_bytes() {
        assert_eq!(parse("\x1b[1;2H"), vec![csi(b"", b"1;2", b"", b'H')]);
        assert_eq!(parse("\x1b[;5~"), vec![csi(b"", b";5", b"", b'~')]);
    }

    #[test]
    fn dispatches_csi_with_intermediate() {
        assert_eq!(parse("\x1b[1 q"), vec![csi(b"", b"1", b" ", b'q')]);
    }

    #[test]
    fn truncates_excess_intermediates() {
        assert_eq!(
            parse("\x1b[1 !#p"),
            vec![ActorEvents::CsiDispatch {
                private_markers: vec![],
                params: b"1".to_vec(),
                intermediates: b" !".to_vec(),
                ignored_excess_intermediates: true,
                byte: b'p',
            }]
        );
    }

    #[test]
    fn colon_after_introducer_drops_sequence() {
        assert_eq!(parse("\x1b[:3mx"), vec![ActorEvents::Print('x')]);
    }

    #[test]
    fn private_marker_after_params_drops_sequence() {
        assert_eq!(parse("\x1b[1?mx"), vec![ActorEvents::Print('x')]);
    }

    #[test]
    fn digit_after_intermediate_drops_sequence() {
        assert_eq!(parse("\x1b[1 2qx"), vec![ActorEvents::Print('x')]);
    }

    #[test]
    fn single_shift_two_escorts_next_printable() {
        assert_eq!(parse("\x1bNa"), vec![ActorEvents::SingleShift2('a')]);
    }

    #[test]
    fn single_shift_three_escorts_next_printable() {
        assert_eq!(parse("\x1bOP"), vec![ActorEvents::SingleShift3('P')]);
    }

    #[test]
    fn single_shift_is_discarded_by_new_escape() {
        assert_eq!(parse("\x1bN\x1b[A"), vec![csi(b"", b"", b"", b'A')]);
    }

    #[test]
    fn dispatches_plain_escape_sequences() {
        assert_eq!(
            parse("\x1b(B"),
            vec![ActorEvents::EscDispatch {
                intermediates: b"(".to_vec(),
                byte: b'B',
            }]
        );
    }

    #[test]
    fn can_aborts_sequence_and_discards_accumulators() {
        assert_eq!(
            parse("\x1b[12\u{18}4\x1b[m"),
            vec![
                ActorEvents::Execute(0x18),
                ActorEvents::Print('4'),
                csi(b"", b"", b"", b'm'),
            ]
        );
    }

    #[test]
    fn executes_c0_inside_escape_without_leaving_it() {
        assert_eq!(
            parse("\x1b\u{7}[m"),
            vec![ActorEvents::Execute(0x07), csi(b"", b"", b"", b'm')]
        );
    }

    #[test]
    fn del_is_swallowed_inside_sequences() {
        assert_eq!(parse("\x1b\u{7f}[A"), vec![csi(b"", b"", b"", b'A')]);
        assert_eq!(parse("\x1b[1\u{7f}m"), vec![csi(b"", b"1", b"", b'm')]);
    }

    #[test]
    fn esc_inside_escape_restarts_the_sequence() {
        assert_eq!(parse("\x1b\x1b[A"), vec![csi(b"", b"", b"", b'A')]);
    }

    #[test]
    fn eight_bit_csi_introducer() {
        assert_eq!(parse("\u{9b}1;2H"), vec![csi(b"", b"1;2", b"", b'H')]);
    }

    #[test]
    fn eight_bit_control_executes_from_anywhere() {
        assert_eq!(parse("\u{8d}"), vec![ActorEvents::Execute(0x8d)]);
    }

    #[test]
    fn osc_collects_until_st() {
        assert_eq!(
            parse("\x1b]0;hi\u{9c}x"),
            vec![
                ActorEvents::OscStart,
                ActorEvents::OscPut('0'),
                ActorEvents::OscPut(';'),
                ActorEvents::OscPut('h'),
                ActorEvents::OscPut('i'),
                ActorEvents::OscEnd,
                ActorEvents::Print('x'),
            ]
        );
    }

    #[test]
    fn osc_is_not_terminated_by_bel() {
        assert_eq!(
            parse("\x1b]t\u{7}\u{9c}"),
            vec![
                ActorEvents::OscStart,
                ActorEvents::OscPut('t'),
                ActorEvents::OscEnd,
            ]
        );
    }

    #[test]
    fn osc_with_esc_sequence_st() {
        // `ESC \` is the long form of ST, but the ESC on its own breaks out
        // of the OSC state and the `\` is dispatched from the escape state.
        assert_eq!(
            parse("\x1b]woot\x1b\\"),
            vec![
                ActorEvents::OscStart,
                ActorEvents::OscPut('w'),
                ActorEvents::OscPut('o'),
                ActorEvents::OscPut('o'),
                ActorEvents::OscPut('t'),
                ActorEvents::OscEnd,
                ActorEvents::EscDispatch {
                    intermediates: vec![],
                    byte: b'\\',
                },
            ]
        );
    }

    #[test]
    fn dcs_hooks_and_forwards_payload() {
        assert_eq!(
            parse("\x1bP1;2qAB\u{9c}"),
            vec![
                ActorEvents::Hook,
                ActorEvents::Put(b'A'),
                ActorEvents::Put(b'B'),
                ActorEvents::Unhook,
            ]
        );
    }

    #[test]
    fn dcs_colon_is_swallowed_until_st() {
        assert_eq!(parse("\x1bP:junk\u{9c}x"), vec![ActorEvents::Print('x')]);
    }

    #[test]
    fn sos_pm_apc_strings_are_swallowed() {
        assert_eq!(parse("\x1bXsecret\u{9c}x"), vec![ActorEvents::Print('x')]);
        assert_eq!(parse("\x1b^p\u{9c}"), vec![]);
        assert_eq!(parse("\x1b_a\u{9c}"), vec![]);
    }

    #[test]
    fn pending_escape_reports_and_aborts() {
        let mut parser = Parser::new();
        let mut actor = CollectingActor::default();

        parser.advance('\x1b', &mut actor);
        assert!(parser.pending_escape());

        parser.abort_escape(&mut actor);
        assert!(!parser.pending_escape());

        parser.advance('a', &mut actor);
        assert_eq!(actor.actions, vec![ActorEvents::Print('a')]);
    }

    // Place tests under this line
}
