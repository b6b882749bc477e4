//! Testing utilities and mock implementations.
//!
//! This module provides a mock transcoder so the orchestrator can be exercised
//! without an AVIF-capable build.
//!
//! # Example
//!
//! ```rust,ignore
//! use avif2jpg_core::testing::MockTranscoder;
//!
//! let transcoder = MockTranscoder::new();
//! transcoder.fail_on("bad.avif");
//!
//! let mut orchestrator = Orchestrator::new(config, transcoder.clone());
//! orchestrator.run()?;
//!
//! assert_eq!(transcoder.recorded_transcodes().len(), 3);
//! ```

mod mock_transcoder;

pub use mock_transcoder::{MockTranscoder, RecordedTranscode};
