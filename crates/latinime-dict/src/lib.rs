//! Read-only views over binary predictive-text dictionaries
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::doc_markdown)] // Format field names don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
//! A binary dictionary is a single byte buffer: a version-dependent header
//! followed by the root of the lookup structure. This crate identifies the
//! header version, finds where the root begins and decodes the header's
//! flags and attributes. It never copies or modifies the buffer.
//!
//! # Modules
//!
//! - [`view`]: [`DictionaryView`], the non-owning entry point
//! - [`format`]: format detection and header size computation
//! - [`header`]: header flags, attributes and a header builder
//! - [`mapped`]: memory-mapped dictionary files
//!
//! # Example
//!
//! ```rust,no_run
//! use latinime_dict::{FormatVersion, MappedDictionary};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dictionary = MappedDictionary::open("main_en_us.dict")?;
//! let view = dictionary.view()?;
//!
//! if view.format() == FormatVersion::Unknown {
//!     return Err("dictionary unavailable".into());
//! }
//! println!("root structure at byte {}", view.root_offset());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod header;
pub mod mapped;
pub mod view;

pub use error::{DictError, Result};
pub use format::{FormatVersion, detect_format_version, header_size};
pub use header::{DictionaryHeader, HeaderBuilder, HeaderFlags};
pub use mapped::MappedDictionary;
pub use view::{DictionaryView, ROOT_POSITION};
