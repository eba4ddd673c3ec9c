//! Fenced code block extraction for Markdown-like documents
//!
//! Finds fenced code regions, optionally drops phantom detections, and assigns each
//! region a line span, byte span, and nesting level so that downstream tools
//! can treat code as atomic units.
//!
//! ```
//! use codefence::Extractor;
//!
//! let doc = "# Title\n\n```python\nprint(1)\n```\n";
//! let extraction = Extractor::default().extract(doc).unwrap();
//!
//! let block = &extraction.blocks[0];
//! assert_eq!(block.language.as_deref(), Some("python"));
//! assert_eq!((block.start_line, block.end_line), (3, 5));
//! assert_eq!(&doc[block.start_offset..block.end_offset], block.raw_content);
//! ```

pub mod block;
pub mod config;
pub mod error;
pub mod lines;
pub mod marker;
pub mod nesting;
pub mod normalize;
pub mod phantom;
pub mod pipeline;
pub mod scanner;

pub use block::{ExtractedBlock, block_at_line};
pub use config::{Config, PhantomConfig, ScannerConfig};
pub use error::{Error, Result};
pub use lines::{SourceLine, from_external, split_lines, to_external, validate_range};
pub use marker::{FenceKind, FenceMarker};
pub use nesting::{BlockCandidate, ResolvedCandidate, resolve};
pub use normalize::normalize_line_endings;
pub use phantom::{PhantomFilter, SequenceWarning, filter, validate_sequence};
pub use pipeline::{Extraction, Extractor};
pub use scanner::{Scanner, extract};
