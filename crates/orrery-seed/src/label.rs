/// One step of a derivation path.
///
/// Strings hash as their raw UTF-8 bytes. Integers hash as 32-byte
/// big-endian two's complement, sign-extended, so `Label::from(5i16)` and
/// `Label::from(5u64)` address the same child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label<'a> {
    /// A named property or branch, e.g. `"mass"`.
    Str(&'a str),
    /// A signed index such as a sector coordinate.
    Int(i128),
    /// An unsigned index such as an object or planet number.
    UInt(u128),
}

impl Label<'_> {
    /// Feed the canonical encoding of this label to `sink`.
    pub(crate) fn encode(&self, sink: &mut impl FnMut(&[u8])) {
        match *self {
            Label::Str(text) => sink(text.as_bytes()),
            Label::Int(value) => {
                let fill = if value < 0 { 0xff } else { 0x00 };
                sink(&[fill; 16]);
                sink(&value.to_be_bytes());
            }
            Label::UInt(value) => {
                sink(&[0u8; 16]);
                sink(&value.to_be_bytes());
            }
        }
    }
}

impl<'a> From<&'a str> for Label<'a> {
    fn from(text: &'a str) -> Self {
        Label::Str(text)
    }
}

impl<'a> From<&'a String> for Label<'a> {
    fn from(text: &'a String) -> Self {
        Label::Str(text.as_str())
    }
}

macro_rules! signed_label {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Label<'_> {
            fn from(value: $ty) -> Self {
                Label::Int(value as i128)
            }
        })*
    };
}

macro_rules! unsigned_label {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Label<'_> {
            fn from(value: $ty) -> Self {
                Label::UInt(value as u128)
            }
        })*
    };
}

signed_label!(i8, i16, i32, i64, i128);
unsigned_label!(u8, u16, u32, u64, u128, usize);
