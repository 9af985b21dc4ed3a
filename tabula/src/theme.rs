use crate::style::Rgb;

/// Named color roles for the console. A palette is a flat set of
/// concrete colors; widgets never hold raw RGB values themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub info: Rgb,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Rgb::new(248, 249, 250),
            surface: Rgb::new(255, 255, 255),
            border: Rgb::new(210, 214, 220),
            text: Rgb::new(33, 37, 41),
            muted: Rgb::new(108, 117, 125),
            primary: Rgb::new(13, 110, 253),
            success: Rgb::new(25, 135, 84),
            warning: Rgb::new(176, 128, 7),
            error: Rgb::new(220, 53, 69),
            info: Rgb::new(13, 138, 176),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Rgb::new(26, 26, 36),
            surface: Rgb::new(38, 38, 52),
            border: Rgb::new(70, 72, 90),
            text: Rgb::new(232, 232, 232),
            muted: Rgb::new(127, 140, 141),
            primary: Rgb::new(100, 150, 255),
            success: Rgb::new(46, 204, 113),
            warning: Rgb::new(241, 196, 15),
            error: Rgb::new(231, 76, 60),
            info: Rgb::new(52, 152, 219),
        }
    }

    pub fn tone(&self, tone: Tone) -> Rgb {
        match tone {
            Tone::Default => self.text,
            Tone::Muted => self.muted,
            Tone::Primary => self.primary,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Error => self.error,
            Tone::Info => self.info,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

/// Semantic color tone, resolved against the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl Tone {
    /// Map a well-known status label to its display tone. Unknown
    /// labels fall back to muted, matching the console's convention
    /// that anything unrecognized renders de-emphasized.
    pub fn for_status(status: &str) -> Tone {
        match status {
            "Online" | "Active" | "Allowed" | "Resolved" | "Completed" | "Published" => {
                Tone::Success
            }
            "Maintenance" | "Pending" | "Draft" | "ReadOnly" | "Read-only" | "Shadowed"
            | "Medium" | "Acknowledged" | "Warning" => Tone::Warning,
            "Blocked" | "Decommissioned" | "Critical" | "High" | "Error" | "Open"
            | "Cancelled" => Tone::Error,
            "Processing" | "Info" | "Low" => Tone::Info,
            _ => Tone::Muted,
        }
    }
}
