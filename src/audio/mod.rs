//! # Audio Pairing Stub
//!
//! Picks a placeholder track for a mood and concatenates its description
//! with a video description.
//!
//! [`AudioPairing::process_all_videos`] pairs every description on disk and
//! backs `ranking-reels generate`. The web pipeline pairs only the videos of
//! the current run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ranking_reels::{audio::AudioPairing, config::Config};
//!
//! # fn main() -> ranking_reels::Result<()> {
//! let pairing = AudioPairing::from_config(&Config::default());
//! let track = pairing.get_audio_track("calm")?;
//! println!("Selected {}", track.display());
//! # Ok(())
//! # }
//! ```

pub mod pairing;

pub use pairing::{mood_from_description, AudioPairing, PairedVideo};
