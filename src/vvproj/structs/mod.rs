pub mod accent_phrase;
pub mod audio_item;
pub mod audio_query;
pub mod mora;
pub mod project;

pub use accent_phrase::AccentPhrase;
pub use audio_item::AudioItem;
pub use audio_query::AudioQuery;
pub use mora::Mora;
pub use project::{Project, Talk};
