pub mod buffer;
pub mod event;
pub mod input;
pub mod layout;
pub mod style;
pub mod table;
pub mod terminal;
pub mod text;
pub mod theme;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers};
pub use input::{TextInput, InputResult};
pub use layout::Rect;
pub use style::{Rgb, TextStyle};
pub use terminal::Terminal;
pub use theme::{Palette, Tone};
