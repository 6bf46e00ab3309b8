use tedbot_core::{Accent, ErrorKind, ACCENT_PROPERTIES};

use crate::ports::{Notifier, ThemePort};

/// Shows the notice mapped to `kind`. Total over every kind, unknown ones included.
pub fn notify<N: Notifier + ?Sized>(notifier: &mut N, kind: ErrorKind) {
    notifier.notify(kind.notice());
}

pub fn set_accent<T: ThemePort + ?Sized>(theme: &mut T, accent: &Accent) {
    for property in ACCENT_PROPERTIES {
        theme.set_property(property, &accent.hex_code);
    }
}
