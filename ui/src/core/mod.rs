//! Pure editor core: card state, framing, colors and upload bookkeeping.
//! Nothing in here touches the DOM except `platform`.

pub mod color;
pub mod decode;
pub mod error;
pub mod framing;
pub mod platform;
pub mod presets;
pub mod session;
pub mod snapshot;
pub mod state;

pub use color::{color_for, Rgb};
pub use decode::{decode_image, decode_named, DecodeTicket, ImageSource};
pub use error::{EditorError, EditorResult};
pub use framing::{compute_framing, Framing, FramingParams, Offset};
pub use session::{CardMessage, EditorSession, ImageFrame};
pub use snapshot::{BarSnapshot, CardSnapshot};
pub use state::{CardState, ScoreBar, TextField};
