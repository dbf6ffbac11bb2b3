use std::fmt::{self, Debug, Formatter};

/// Debug-formats as the given text, without quotes. Used for fields that can't be shown, like
/// closures.
pub struct DebugRaw(pub &'static str);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
