use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Physical key position. Held as a raw integer since the native side may
/// report values outside any closed Rust enum.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Scancode(pub i32);

impl Scancode {
    pub const UNKNOWN: Self = Self(0);

    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);

    pub const _1: Self = Self(30);
    pub const _2: Self = Self(31);
    pub const _3: Self = Self(32);
    pub const _4: Self = Self(33);
    pub const _5: Self = Self(34);
    pub const _6: Self = Self(35);
    pub const _7: Self = Self(36);
    pub const _8: Self = Self(37);
    pub const _9: Self = Self(38);
    pub const _0: Self = Self(39);

    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const EQUALS: Self = Self(46);
    pub const LEFTBRACKET: Self = Self(47);
    pub const RIGHTBRACKET: Self = Self(48);
    pub const BACKSLASH: Self = Self(49);
    pub const NONUSHASH: Self = Self(50);
    pub const SEMICOLON: Self = Self(51);
    pub const APOSTROPHE: Self = Self(52);
    pub const GRAVE: Self = Self(53);
    pub const COMMA: Self = Self(54);
    pub const PERIOD: Self = Self(55);
    pub const SLASH: Self = Self(56);
    pub const CAPSLOCK: Self = Self(57);

    pub const F1: Self = Self(58);
    pub const F2: Self = Self(59);
    pub const F3: Self = Self(60);
    pub const F4: Self = Self(61);
    pub const F5: Self = Self(62);
    pub const F6: Self = Self(63);
    pub const F7: Self = Self(64);
    pub const F8: Self = Self(65);
    pub const F9: Self = Self(66);
    pub const F10: Self = Self(67);
    pub const F11: Self = Self(68);
    pub const F12: Self = Self(69);

    pub const PRINTSCREEN: Self = Self(70);
    pub const SCROLLLOCK: Self = Self(71);
    pub const PAUSE: Self = Self(72);
    pub const INSERT: Self = Self(73);
    pub const HOME: Self = Self(74);
    pub const PAGEUP: Self = Self(75);
    pub const DELETE: Self = Self(76);
    pub const END: Self = Self(77);
    pub const PAGEDOWN: Self = Self(78);
    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);

    pub const NUMLOCKCLEAR: Self = Self(83);
    pub const KP_DIVIDE: Self = Self(84);
    pub const KP_MULTIPLY: Self = Self(85);
    pub const KP_MINUS: Self = Self(86);
    pub const KP_PLUS: Self = Self(87);
    pub const KP_ENTER: Self = Self(88);
    pub const KP_1: Self = Self(89);
    pub const KP_2: Self = Self(90);
    pub const KP_3: Self = Self(91);
    pub const KP_4: Self = Self(92);
    pub const KP_5: Self = Self(93);
    pub const KP_6: Self = Self(94);
    pub const KP_7: Self = Self(95);
    pub const KP_8: Self = Self(96);
    pub const KP_9: Self = Self(97);
    pub const KP_0: Self = Self(98);
    pub const KP_PERIOD: Self = Self(99);

    pub const NONUSBACKSLASH: Self = Self(100);
    pub const APPLICATION: Self = Self(101);
    pub const POWER: Self = Self(102);
    pub const KP_EQUALS: Self = Self(103);
    pub const F13: Self = Self(104);
    pub const F14: Self = Self(105);
    pub const F15: Self = Self(106);
    pub const F16: Self = Self(107);
    pub const F17: Self = Self(108);
    pub const F18: Self = Self(109);
    pub const F19: Self = Self(110);
    pub const F20: Self = Self(111);
    pub const F21: Self = Self(112);
    pub const F22: Self = Self(113);
    pub const F23: Self = Self(114);
    pub const F24: Self = Self(115);
    pub const EXECUTE: Self = Self(116);
    pub const HELP: Self = Self(117);
    pub const MENU: Self = Self(118);
    pub const SELECT: Self = Self(119);
    pub const STOP: Self = Self(120);
    pub const AGAIN: Self = Self(121);
    pub const UNDO: Self = Self(122);
    pub const CUT: Self = Self(123);
    pub const COPY: Self = Self(124);
    pub const PASTE: Self = Self(125);
    pub const FIND: Self = Self(126);
    pub const MUTE: Self = Self(127);
    pub const VOLUMEUP: Self = Self(128);
    pub const VOLUMEDOWN: Self = Self(129);

    pub const LCTRL: Self = Self(224);
    pub const LSHIFT: Self = Self(225);
    pub const LALT: Self = Self(226);
    pub const LGUI: Self = Self(227);
    pub const RCTRL: Self = Self(228);
    pub const RSHIFT: Self = Self(229);
    pub const RALT: Self = Self(230);
    pub const RGUI: Self = Self(231);

    pub const MODE: Self = Self(257);

    pub const AUDIONEXT: Self = Self(258);
    pub const AUDIOPREV: Self = Self(259);
    pub const AUDIOSTOP: Self = Self(260);
    pub const AUDIOPLAY: Self = Self(261);
    pub const AUDIOMUTE: Self = Self(262);

    pub const NUM_SCANCODES: usize = 512;
}

pub const K_SCANCODE_MASK: i32 = 1 << 30;

pub const fn scancode_to_keycode(scancode: Scancode) -> Keycode {
    Keycode(scancode.0 | K_SCANCODE_MASK)
}

/// Virtual key as mapped by the current keyboard layout.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Keycode(pub i32);

impl Keycode {
    pub const UNKNOWN: Self = Self(0);

    pub const RETURN: Self = Self('\r' as i32);
    pub const ESCAPE: Self = Self(0x1b);
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self('\t' as i32);
    pub const SPACE: Self = Self(' ' as i32);
    pub const EXCLAIM: Self = Self('!' as i32);
    pub const QUOTEDBL: Self = Self('"' as i32);
    pub const HASH: Self = Self('#' as i32);
    pub const PERCENT: Self = Self('%' as i32);
    pub const DOLLAR: Self = Self('$' as i32);
    pub const AMPERSAND: Self = Self('&' as i32);
    pub const QUOTE: Self = Self('\'' as i32);
    pub const LEFTPAREN: Self = Self('(' as i32);
    pub const RIGHTPAREN: Self = Self(')' as i32);
    pub const ASTERISK: Self = Self('*' as i32);
    pub const PLUS: Self = Self('+' as i32);
    pub const COMMA: Self = Self(',' as i32);
    pub const MINUS: Self = Self('-' as i32);
    pub const PERIOD: Self = Self('.' as i32);
    pub const SLASH: Self = Self('/' as i32);
    pub const _0: Self = Self('0' as i32);
    pub const _1: Self = Self('1' as i32);
    pub const _2: Self = Self('2' as i32);
    pub const _3: Self = Self('3' as i32);
    pub const _4: Self = Self('4' as i32);
    pub const _5: Self = Self('5' as i32);
    pub const _6: Self = Self('6' as i32);
    pub const _7: Self = Self('7' as i32);
    pub const _8: Self = Self('8' as i32);
    pub const _9: Self = Self('9' as i32);
    pub const COLON: Self = Self(':' as i32);
    pub const SEMICOLON: Self = Self(';' as i32);
    pub const LESS: Self = Self('<' as i32);
    pub const EQUALS: Self = Self('=' as i32);
    pub const GREATER: Self = Self('>' as i32);
    pub const QUESTION: Self = Self('?' as i32);
    pub const AT: Self = Self('@' as i32);
    pub const LEFTBRACKET: Self = Self('[' as i32);
    pub const BACKSLASH: Self = Self('\\' as i32);
    pub const RIGHTBRACKET: Self = Self(']' as i32);
    pub const CARET: Self = Self('^' as i32);
    pub const UNDERSCORE: Self = Self('_' as i32);
    pub const BACKQUOTE: Self = Self('`' as i32);
    pub const A: Self = Self('a' as i32);
    pub const B: Self = Self('b' as i32);
    pub const C: Self = Self('c' as i32);
    pub const D: Self = Self('d' as i32);
    pub const E: Self = Self('e' as i32);
    pub const F: Self = Self('f' as i32);
    pub const G: Self = Self('g' as i32);
    pub const H: Self = Self('h' as i32);
    pub const I: Self = Self('i' as i32);
    pub const J: Self = Self('j' as i32);
    pub const K: Self = Self('k' as i32);
    pub const L: Self = Self('l' as i32);
    pub const M: Self = Self('m' as i32);
    pub const N: Self = Self('n' as i32);
    pub const O: Self = Self('o' as i32);
    pub const P: Self = Self('p' as i32);
    pub const Q: Self = Self('q' as i32);
    pub const R: Self = Self('r' as i32);
    pub const S: Self = Self('s' as i32);
    pub const T: Self = Self('t' as i32);
    pub const U: Self = Self('u' as i32);
    pub const V: Self = Self('v' as i32);
    pub const W: Self = Self('w' as i32);
    pub const X: Self = Self('x' as i32);
    pub const Y: Self = Self('y' as i32);
    pub const Z: Self = Self('z' as i32);
    pub const DELETE: Self = Self(0x7f);

    pub const CAPSLOCK: Self = scancode_to_keycode(Scancode::CAPSLOCK);
    pub const F1: Self = scancode_to_keycode(Scancode::F1);
    pub const F2: Self = scancode_to_keycode(Scancode::F2);
    pub const F3: Self = scancode_to_keycode(Scancode::F3);
    pub const F4: Self = scancode_to_keycode(Scancode::F4);
    pub const F5: Self = scancode_to_keycode(Scancode::F5);
    pub const F6: Self = scancode_to_keycode(Scancode::F6);
    pub const F7: Self = scancode_to_keycode(Scancode::F7);
    pub const F8: Self = scancode_to_keycode(Scancode::F8);
    pub const F9: Self = scancode_to_keycode(Scancode::F9);
    pub const F10: Self = scancode_to_keycode(Scancode::F10);
    pub const F11: Self = scancode_to_keycode(Scancode::F11);
    pub const F12: Self = scancode_to_keycode(Scancode::F12);
    pub const PRINTSCREEN: Self = scancode_to_keycode(Scancode::PRINTSCREEN);
    pub const SCROLLLOCK: Self = scancode_to_keycode(Scancode::SCROLLLOCK);
    pub const PAUSE: Self = scancode_to_keycode(Scancode::PAUSE);
    pub const INSERT: Self = scancode_to_keycode(Scancode::INSERT);
    pub const HOME: Self = scancode_to_keycode(Scancode::HOME);
    pub const PAGEUP: Self = scancode_to_keycode(Scancode::PAGEUP);
    pub const END: Self = scancode_to_keycode(Scancode::END);
    pub const PAGEDOWN: Self = scancode_to_keycode(Scancode::PAGEDOWN);
    pub const RIGHT: Self = scancode_to_keycode(Scancode::RIGHT);
    pub const LEFT: Self = scancode_to_keycode(Scancode::LEFT);
    pub const DOWN: Self = scancode_to_keycode(Scancode::DOWN);
    pub const UP: Self = scancode_to_keycode(Scancode::UP);
    pub const NUMLOCKCLEAR: Self = scancode_to_keycode(Scancode::NUMLOCKCLEAR);
    pub const KP_DIVIDE: Self = scancode_to_keycode(Scancode::KP_DIVIDE);
    pub const KP_MULTIPLY: Self = scancode_to_keycode(Scancode::KP_MULTIPLY);
    pub const KP_MINUS: Self = scancode_to_keycode(Scancode::KP_MINUS);
    pub const KP_PLUS: Self = scancode_to_keycode(Scancode::KP_PLUS);
    pub const KP_ENTER: Self = scancode_to_keycode(Scancode::KP_ENTER);
    pub const KP_0: Self = scancode_to_keycode(Scancode::KP_0);
    pub const KP_1: Self = scancode_to_keycode(Scancode::KP_1);
    pub const KP_2: Self = scancode_to_keycode(Scancode::KP_2);
    pub const KP_3: Self = scancode_to_keycode(Scancode::KP_3);
    pub const KP_4: Self = scancode_to_keycode(Scancode::KP_4);
    pub const KP_5: Self = scancode_to_keycode(Scancode::KP_5);
    pub const KP_6: Self = scancode_to_keycode(Scancode::KP_6);
    pub const KP_7: Self = scancode_to_keycode(Scancode::KP_7);
    pub const KP_8: Self = scancode_to_keycode(Scancode::KP_8);
    pub const KP_9: Self = scancode_to_keycode(Scancode::KP_9);
    pub const KP_PERIOD: Self = scancode_to_keycode(Scancode::KP_PERIOD);
    pub const APPLICATION: Self = scancode_to_keycode(Scancode::APPLICATION);
    pub const POWER: Self = scancode_to_keycode(Scancode::POWER);
    pub const MUTE: Self = scancode_to_keycode(Scancode::MUTE);
    pub const VOLUMEUP: Self = scancode_to_keycode(Scancode::VOLUMEUP);
    pub const VOLUMEDOWN: Self = scancode_to_keycode(Scancode::VOLUMEDOWN);
    pub const LCTRL: Self = scancode_to_keycode(Scancode::LCTRL);
    pub const LSHIFT: Self = scancode_to_keycode(Scancode::LSHIFT);
    pub const LALT: Self = scancode_to_keycode(Scancode::LALT);
    pub const LGUI: Self = scancode_to_keycode(Scancode::LGUI);
    pub const RCTRL: Self = scancode_to_keycode(Scancode::RCTRL);
    pub const RSHIFT: Self = scancode_to_keycode(Scancode::RSHIFT);
    pub const RALT: Self = scancode_to_keycode(Scancode::RALT);
    pub const RGUI: Self = scancode_to_keycode(Scancode::RGUI);
    pub const MODE: Self = scancode_to_keycode(Scancode::MODE);
    pub const AUDIONEXT: Self = scancode_to_keycode(Scancode::AUDIONEXT);
    pub const AUDIOPREV: Self = scancode_to_keycode(Scancode::AUDIOPREV);
    pub const AUDIOSTOP: Self = scancode_to_keycode(Scancode::AUDIOSTOP);
    pub const AUDIOPLAY: Self = scancode_to_keycode(Scancode::AUDIOPLAY);
    pub const AUDIOMUTE: Self = scancode_to_keycode(Scancode::AUDIOMUTE);
}

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Keymod(pub u16);

impl Keymod {
    pub const NONE: Self = Self(0x0000);
    pub const LSHIFT: Self = Self(0x0001);
    pub const RSHIFT: Self = Self(0x0002);
    pub const LCTRL: Self = Self(0x0040);
    pub const RCTRL: Self = Self(0x0080);
    pub const LALT: Self = Self(0x0100);
    pub const RALT: Self = Self(0x0200);
    pub const LGUI: Self = Self(0x0400);
    pub const RGUI: Self = Self(0x0800);
    pub const NUM: Self = Self(0x1000);
    pub const CAPS: Self = Self(0x2000);
    pub const MODE: Self = Self(0x4000);
    pub const RESERVED: Self = Self(0x8000);

    pub const CTRL: Self = Self(Self::LCTRL.0 | Self::RCTRL.0);
    pub const SHIFT: Self = Self(Self::LSHIFT.0 | Self::RSHIFT.0);
    pub const ALT: Self = Self(Self::LALT.0 | Self::RALT.0);
    pub const GUI: Self = Self(Self::LGUI.0 | Self::RGUI.0);

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Keymod {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Keymod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl BitAnd for Keymod {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Keysym {
    pub scancode: Scancode,
    pub sym: Keycode,
    pub modifiers: Keymod,
    pub unused: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keysym_layout() {
        assert_eq!(std::mem::size_of::<Keysym>(), 16);
        assert_eq!(std::mem::offset_of!(Keysym, sym), 4);
        assert_eq!(std::mem::offset_of!(Keysym, modifiers), 8);
        assert_eq!(std::mem::offset_of!(Keysym, unused), 12);
    }

    #[test]
    fn non_character_keys_carry_mask() {
        assert_eq!(Keycode::F1.0, 58 | K_SCANCODE_MASK);
        assert_eq!(Keycode::A.0, 0x61);
        assert!((Keymod::LCTRL | Keymod::NUM).intersects(Keymod::CTRL));
    }
}
