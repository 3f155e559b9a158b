//! Static enumerations of the terminal control vocabulary.
//!
//! These tables exist for presentation and diagnostics: matching a decoded
//! event against a control-code name or looking up the xterm mnemonic of a
//! control sequence. Nothing here runs on the decode hot path.
//!
//! Names follow <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html>.

use std::fmt;

/// Control characters in the C0 group, plus SP and DEL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum C0 {
    /// (NUL, Caret = ^@) Null.
    Null,
    /// (SOH, Caret = ^A) Start of Heading.
    StartOfHeading,
    /// (STX, Caret = ^B) Start of Text.
    StartOfText,
    /// (ETX, Caret = ^C) End of Text.
    EndOfText,
    /// (EOT, Caret = ^D) End of Transmit.
    EndOfTransmit,
    /// (ENQ, Caret = ^E) Enquiry.
    Enquiry,
    /// (ACK, Caret = ^F) Acknowledge.
    Acknowledge,
    /// (BEL, Caret = ^G, C = \a) Bell, triggers the bell or beeper.
    Bell,
    /// (BS, Caret = ^H, C = \b) Backspace.
    Backspace,
    /// (HT, Caret = ^I, C = \t) Horizontal Tabulation.
    HorizontalTab,
    /// (LF, Caret = ^J, C = \n) Line Feed.
    LineFeed,
    /// (VT, Caret = ^K, C = \v) Vertical Tabulation.
    VerticalTab,
    /// (FF, Caret = ^L, C = \f) Form Feed.
    FormFeed,
    /// (CR, Caret = ^M, C = \r) Carriage Return.
    CarriageReturn,
    /// (SO, Caret = ^N) Shift Out, switch to G1.
    ShiftOut,
    /// (SI, Caret = ^O) Shift In, switch to G0.
    ShiftIn,
    /// (DLE, Caret = ^P) Data Link Escape.
    DataLinkEscape,
    /// (DC1, Caret = ^Q) Device Control 1 (X-ON).
    DeviceControl1,
    /// (DC2, Caret = ^R) Device Control 2.
    DeviceControl2,
    /// (DC3, Caret = ^S) Device Control 3 (X-OFF).
    DeviceControl3,
    /// (DC4, Caret = ^T) Device Control 4.
    DeviceControl4,
    /// (NAK, Caret = ^U) Negative Acknowledge.
    NegativeAcknowledge,
    /// (SYN, Caret = ^V) Synchronous Idle.
    SynchronousIdle,
    /// (ETB, Caret = ^W) End of Transmit Block.
    EndOfTransmitBlock,
    /// (CAN, Caret = ^X) Cancel, aborts an escape sequence in progress.
    Cancel,
    /// (EM, Caret = ^Y) End of Medium.
    EndOfMedium,
    /// (SUB, Caret = ^Z) Substitute, also aborts an escape sequence.
    Substitute,
    /// (ESC, Caret = ^[) Escape.
    Escape,
    /// (FS, Caret = ^\) File Separator.
    FileSeparator,
    /// (GS, Caret = ^]) Group Separator.
    GroupSeparator,
    /// (RS, Caret = ^^) Record Separator.
    RecordSeparator,
    /// (US, Caret = ^_) Unit Separator.
    UnitSeparator,
    /// (SP) Space.
    Space,
    /// (DEL, Caret = ^?) Delete.
    Delete,
    /// Byte outside of the C0 group.
    Unexpected(u8),
}

impl From<u8> for C0 {
    fn from(byte: u8) -> Self {
        use C0::*;
        match byte {
            0x00 => Null,
            0x01 => StartOfHeading,
            0x02 => StartOfText,
            0x03 => EndOfText,
            0x04 => EndOfTransmit,
            0x05 => Enquiry,
            0x06 => Acknowledge,
            0x07 => Bell,
            0x08 => Backspace,
            0x09 => HorizontalTab,
            0x0A => LineFeed,
            0x0B => VerticalTab,
            0x0C => FormFeed,
            0x0D => CarriageReturn,
            0x0E => ShiftOut,
            0x0F => ShiftIn,
            0x10 => DataLinkEscape,
            0x11 => DeviceControl1,
            0x12 => DeviceControl2,
            0x13 => DeviceControl3,
            0x14 => DeviceControl4,
            0x15 => NegativeAcknowledge,
            0x16 => SynchronousIdle,
            0x17 => EndOfTransmitBlock,
            0x18 => Cancel,
            0x19 => EndOfMedium,
            0x1A => Substitute,
            0x1B => Escape,
            0x1C => FileSeparator,
            0x1D => GroupSeparator,
            0x1E => RecordSeparator,
            0x1F => UnitSeparator,
            0x20 => Space,
            0x7F => Delete,
            other => Unexpected(other),
        }
    }
}

impl fmt::Display for C0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use C0::*;
        let code = match self {
            Null => "NUL",
            StartOfHeading => "SOH",
            StartOfText => "STX",
            EndOfText => "ETX",
            EndOfTransmit => "EOT",
            Enquiry => "ENQ",
            Acknowledge => "ACK",
            Bell => "BEL",
            Backspace => "BS",
            HorizontalTab => "HT",
            LineFeed => "LF",
            VerticalTab => "VT",
            FormFeed => "FF",
            CarriageReturn => "CR",
            ShiftOut => "SO",
            ShiftIn => "SI",
            DataLinkEscape => "DLE",
            DeviceControl1 => "DC1",
            DeviceControl2 => "DC2",
            DeviceControl3 => "DC3",
            DeviceControl4 => "DC4",
            NegativeAcknowledge => "NAK",
            SynchronousIdle => "SYN",
            EndOfTransmitBlock => "ETB",
            Cancel => "CAN",
            EndOfMedium => "EM",
            Substitute => "SUB",
            Escape => "ESC",
            FileSeparator => "FS",
            GroupSeparator => "GS",
            RecordSeparator => "RS",
            UnitSeparator => "US",
            Space => "SP",
            Delete => "DEL",
            Unexpected(_) => "UNEXPECTED",
        };

        match self {
            Unexpected(b) => write!(f, "{code}: 0x{b:02X}"),
            _ => write!(f, "{code}"),
        }
    }
}

/// Control characters in the C1 group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum C1 {
    /// (IND) Index.
    Index,
    /// (NEL) Next Line.
    NextLine,
    /// (HTS) Horizontal Tabulation Set.
    HorizontalTabSet,
    /// (RI) Reverse Index.
    ReverseIndex,
    /// (SS2) Single Shift Select of G2 Character Set.
    SingleShift2,
    /// (SS3) Single Shift Select of G3 Character Set.
    SingleShift3,
    /// (DCS) Device Control String.
    DeviceControlString,
    /// (SPA) Start of Guarded Area.
    StartOfGuardedArea,
    /// (EPA) End of Guarded Area.
    EndOfGuardedArea,
    /// (SOS) Start of String.
    StartOfString,
    /// (DECID) Return Terminal ID, obsolete form of `CSI c`.
    ReturnTerminalId,
    /// (CSI) Control Sequence Introducer.
    ControlSequenceIntroducer,
    /// (ST) String Terminator.
    StringTerminator,
    /// (OSC) Operating System Command.
    OperatingSystemCommand,
    /// (PM) Privacy Message.
    PrivacyMessage,
    /// (APC) Application Program Command.
    ApplicationProgramCommand,
    /// Byte without an assigned C1 meaning, or outside the group.
    Unexpected(u8),
}

impl From<u8> for C1 {
    fn from(byte: u8) -> Self {
        use C1::*;
        match byte {
            0x84 => Index,
            0x85 => NextLine,
            0x88 => HorizontalTabSet,
            0x8D => ReverseIndex,
            0x8E => SingleShift2,
            0x8F => SingleShift3,
            0x90 => DeviceControlString,
            0x96 => StartOfGuardedArea,
            0x97 => EndOfGuardedArea,
            0x98 => StartOfString,
            0x9A => ReturnTerminalId,
            0x9B => ControlSequenceIntroducer,
            0x9C => StringTerminator,
            0x9D => OperatingSystemCommand,
            0x9E => PrivacyMessage,
            0x9F => ApplicationProgramCommand,
            other => Unexpected(other),
        }
    }
}

impl fmt::Display for C1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use C1::*;
        let code = match self {
            Index => "IND",
            NextLine => "NEL",
            HorizontalTabSet => "HTS",
            ReverseIndex => "RI",
            SingleShift2 => "SS2",
            SingleShift3 => "SS3",
            DeviceControlString => "DCS",
            StartOfGuardedArea => "SPA",
            EndOfGuardedArea => "EPA",
            StartOfString => "SOS",
            ReturnTerminalId => "DECID",
            ControlSequenceIntroducer => "CSI",
            StringTerminator => "ST",
            OperatingSystemCommand => "OSC",
            PrivacyMessage => "PM",
            ApplicationProgramCommand => "APC",
            Unexpected(_) => "UNEXPECTED",
        };

        match self {
            Unexpected(b) => write!(f, "{code}: 0x{b:02X}"),
            _ => write!(f, "{code}"),
        }
    }
}

/// Mnemonic of a CSI sequence keyed by its private markers, intermediates
/// and final byte. Parameter values do not take part in the lookup.
#[must_use]
pub fn csi_name(
    private_markers: &[u8],
    intermediates: &[u8],
    final_byte: u8,
) -> Option<&'static str> {
    match (private_markers, intermediates, final_byte) {
        (b"", b"", b'@') => Some("ICH"),
        (b"", b" ", b'@') => Some("SL"),
        (b"", b"", b'A') => Some("CUU"),
        (b"", b" ", b'A') => Some("SR"),
        (b"", b"", b'B') => Some("CUD"),
        (b"", b"", b'C') => Some("CUF"),
        (b"", b"", b'D') => Some("CUB"),
        (b"", b"", b'E') => Some("CNL"),
        (b"", b"", b'F') => Some("CPL"),
        (b"", b"", b'G') => Some("CHA"),
        (b"", b"", b'H') => Some("CUP"),
        (b"", b"", b'I') => Some("CHT"),
        (b"", b"", b'J') => Some("ED"),
        (b"?", b"", b'J') => Some("DECSED"),
        (b"", b"", b'K') => Some("EL"),
        (b"?", b"", b'K') => Some("DECSEL"),
        (b"", b"", b'L') => Some("IL"),
        (b"", b"", b'M') => Some("DL"),
        (b"", b"", b'P') => Some("DCH"),
        (b"", b"#", b'P') => Some("XTPUSHCOLORS"),
        (b"", b"#", b'Q') => Some("XTPOPCOLORS"),
        (b"", b"#", b'R') => Some("XTREPORTCOLORS"),
        (b"", b"", b'S') => Some("SU"),
        (b"?", b"", b'S') => Some("XTSMGRAPHICS"),
        (b"", b"", b'T') => Some("SD"),
        (b">", b"", b'T') => Some("XTRMTITLE"),
        (b"", b"", b'X') => Some("ECH"),
        (b"", b"", b'Z') => Some("CBT"),
        (b"", b"", b'^') => Some("SD"),
        (b"", b"", b'`') => Some("HPA"),
        (b"", b"", b'a') => Some("HPR"),
        (b"", b"", b'b') => Some("REP"),
        (b"", b"", b'c') => Some("PRIMARY_DA"),
        (b">", b"", b'c') => Some("SECONDARY_DA"),
        (b"=", b"", b'c') => Some("TERTIARY_DA"),
        (b"", b"", b'd') => Some("VPA"),
        (b"", b"", b'e') => Some("VPR"),
        (b"", b"", b'f') => Some("HVP"),
        (b"", b"", b'g') => Some("TBC"),
        (b"", b"", b'h') => Some("SM"),
        (b"?", b"", b'h') => Some("DECSET"),
        (b"", b"", b'i') => Some("MC"),
        (b"?", b"", b'i') => Some("MC_DEC"),
        (b"", b"", b'l') => Some("RM"),
        (b"?", b"", b'l') => Some("DECRST"),
        (b"", b"", b'm') => Some("SGR"),
        (b">", b"", b'm') => Some("XTMODKEYS"),
        (b"?", b"", b'm') => Some("XTQMODKEYS"),
        (b"", b"", b'n') => Some("DSR"),
        (b">", b"", b'n') => Some("DM"),
        (b"?", b"", b'n') => Some("DSR_DEC"),
        (b">", b"", b'p') => Some("XTSMPOINTER"),
        (b"", b"!", b'p') => Some("DECSTR"),
        (b"", b"\"", b'p') => Some("DECSCL"),
        (b"", b"$", b'p') => Some("DECRQM"),
        (b"?", b"$", b'p') => Some("DECRQM"),
        (b"", b"#", b'p') => Some("XTPUSHSGR"),
        (b">", b"", b'q') => Some("XTVERSION"),
        (b"", b"", b'q') => Some("DECLL"),
        (b"", b" ", b'q') => Some("DECSCUSR"),
        (b"", b"\"", b'q') => Some("DECSCA"),
        (b"", b"#", b'q') => Some("XTPOPSGR"),
        (b"", b"", b'r') => Some("DECSTBM"),
        (b"?", b"", b'r') => Some("XTRESTORE"),
        (b"", b"$", b'r') => Some("DECCARA"),
        (b"", b"", b's') => Some("SCOSC"),
        (b">", b"", b's') => Some("XTSHIFTESCAPE"),
        (b"?", b"", b's') => Some("XTSAVE"),
        (b"", b"", b't') => Some("XTWINOPS"),
        (b">", b"", b't') => Some("XTSMTITLE"),
        (b"", b" ", b't') => Some("DECSWBV"),
        (b"", b"$", b't') => Some("DECRARA"),
        (b"", b"", b'u') => Some("SCORC"),
        (b"", b" ", b'u') => Some("DECSMBV"),
        (b"", b"$", b'v') => Some("DECCRA"),
        (b"", b"$", b'w') => Some("DECRQPSR"),
        (b"", b"'", b'w') => Some("DECEFR"),
        (b"", b"", b'x') => Some("DECREQTPARM"),
        (b"", b"*", b'x') => Some("DECSACE"),
        (b"", b"$", b'x') => Some("DECFRA"),
        (b"", b"#", b'y') => Some("XTCHECKSUM"),
        (b"", b"*", b'y') => Some("DECRQCRA"),
        (b"", b"'", b'z') => Some("DECELR"),
        (b"", b"$", b'z') => Some("DECERA"),
        (b"", b"'", b'{') => Some("DECSLE"),
        (b"", b"#", b'{') => Some("XTPUSHSGR"),
        (b"", b"$", b'{') => Some("DECSERA"),
        (b"", b"#", b'|') => Some("XTREPORTSGR"),
        (b"", b"$", b'|') => Some("DECSCPP"),
        (b"", b"'", b'|') => Some("DECRQLP"),
        (b"", b"*", b'|') => Some("DECSNLS"),
        (b"", b"#", b'}') => Some("XTPOPSGR"),
        (b"", b"'", b'}') => Some("DECIC"),
        (b"", b"$", b'}') => Some("DECSASD"),
        (b"", b"'", b'~') => Some("DECDC"),
        (b"", b"$", b'~') => Some("DECSSDT"),
        _ => None,
    }
}

/// Mnemonic of a plain escape sequence keyed by its intermediates and
/// final byte.
#[must_use]
pub fn esc_name(intermediates: &[u8], final_byte: u8) -> Option<&'static str> {
    match (intermediates, final_byte) {
        (b"", b'D') => Some("IND"),
        (b"", b'E') => Some("NEL"),
        (b"", b'H') => Some("HTS"),
        (b"", b'M') => Some("RI"),
        (b"", b'N') => Some("SS2"),
        (b"", b'O') => Some("SS3"),
        (b"", b'P') => Some("DCS"),
        (b"", b'X') => Some("SOS"),
        (b"", b'Z') => Some("DECID"),
        (b"", b'[') => Some("CSI"),
        (b"", b'\\') => Some("ST"),
        (b"", b']') => Some("OSC"),
        (b"", b'^') => Some("PM"),
        (b"", b'_') => Some("APC"),
        (b"", b'7') => Some("DECSC"),
        (b"", b'8') => Some("DECRC"),
        (b"", b'=') => Some("DECKPAM"),
        (b"", b'>') => Some("DECKPNM"),
        (b"", b'c') => Some("RIS"),
        (b"#", b'8') => Some("DECALN"),
        _ => None,
    }
}

/// Mnemonic of a device control string keyed by its intermediates and
/// final byte.
#[must_use]
pub fn dcs_name(intermediates: &[u8], final_byte: u8) -> Option<&'static str> {
    match (intermediates, final_byte) {
        (b"", b'q') => Some("SIXEL"),
        (b"", b'|') => Some("DECUDK"),
        (b"+", b'q') => Some("XTGETTCAP"),
        (b"+", b'p') => Some("XTSETTCAP"),
        (b"$", b'q') => Some("DECRQSS"),
        _ => None,
    }
}

/// Description of an operating system command keyed by its leading
/// numeric selector.
#[must_use]
pub fn osc_name(selector: &[u8]) -> Option<&'static str> {
    match selector {
        b"0" => Some("set window title and icon name"),
        b"1" => Some("set icon name"),
        b"2" => Some("set window title"),
        b"4" => Some("change color number"),
        b"8" => Some("set hyperlink"),
        b"10" => Some("set or query default foreground color"),
        b"11" => Some("set or query default background color"),
        b"12" => Some("set or query default cursor color"),
        b"104" => Some("reset color number"),
        b"110" => Some("restore default foreground color"),
        b"111" => Some("restore default background color"),
        b"112" => Some("restore default cursor color"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c0_round_trip_and_display() {
        assert_eq!(C0::from(0x0D), C0::CarriageReturn);
        assert_eq!(C0::from(0x0D).to_string(), "CR");
        assert_eq!(C0::from(0x20), C0::Space);
        assert_eq!(C0::from(0x7F).to_string(), "DEL");
        assert_eq!(C0::from(0x41), C0::Unexpected(0x41));
        assert_eq!(C0::from(0x41).to_string(), "UNEXPECTED: 0x41");
    }

    #[test]
    fn c1_round_trip_and_display() {
        assert_eq!(C1::from(0x9B), C1::ControlSequenceIntroducer);
        assert_eq!(C1::from(0x9B).to_string(), "CSI");
        assert_eq!(C1::from(0x8E).to_string(), "SS2");
        assert_eq!(C1::from(0x81), C1::Unexpected(0x81));
    }

    #[test]
    fn looks_up_csi_names() {
        assert_eq!(csi_name(b"", b"", b'`'), Some("HPA"));
        assert_eq!(csi_name(b"", b"", b'H'), Some("CUP"));
        assert_eq!(csi_name(b"?", b"", b'h'), Some("DECSET"));
        assert_eq!(csi_name(b"", b" ", b'q'), Some("DECSCUSR"));
        assert_eq!(csi_name(b"", b"!", b'p'), Some("DECSTR"));
        assert_eq!(csi_name(b"", b"", b'~'), None);
        assert_eq!(csi_name(b"<", b"", b'M'), None);
    }

    #[test]
    fn looks_up_esc_and_dcs_names() {
        assert_eq!(esc_name(b"", b'7'), Some("DECSC"));
        assert_eq!(esc_name(b"#", b'8'), Some("DECALN"));
        assert_eq!(esc_name(b"(", b'B'), None);
        assert_eq!(dcs_name(b"$", b'q'), Some("DECRQSS"));
        assert_eq!(dcs_name(b"", b'z'), None);
    }

    #[test]
    fn looks_up_osc_selectors() {
        assert_eq!(osc_name(b"0"), Some("set window title and icon name"));
        assert_eq!(osc_name(b"52"), None);
    }
}
