pub use backend::SoundPlayer;

/// Startup gain, matching a comfortably quiet background level.
#[cfg(feature = "sound")]
const DEFAULT_VOLUME: f32 = 0.3;
#[cfg(feature = "sound")]
const VOLUME_STEP: f32 = 0.05;

#[cfg(feature = "sound")]
mod backend {
    use std::time::Duration;

    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, OutputStreamHandle, Sink};
    use thiserror::Error;

    use super::{DEFAULT_VOLUME, VOLUME_STEP};

    #[derive(Debug, Error)]
    enum SoundInitError {
        #[error("no audio output stream: {0}")]
        Stream(#[from] rodio::StreamError),
        #[error("could not open playback sink: {0}")]
        Play(#[from] rodio::PlayError),
    }

    struct Output {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        ambience: Sink,
    }

    impl Output {
        fn open() -> Result<Self, SoundInitError> {
            let (stream, handle) = OutputStream::try_default()?;
            let ambience = Sink::try_new(&handle)?;
            ambience.append(
                SineWave::new(110.0)
                    .amplify(0.18)
                    .repeat_infinite(),
            );
            ambience.set_volume(DEFAULT_VOLUME);
            ambience.pause();
            Ok(Self {
                _stream: stream,
                handle,
                ambience,
            })
        }
    }

    /// Synthesized game audio: a looping ambience drone plus one-shot
    /// effect tones. Construction never fails; if the host has no usable
    /// output device the player runs silent.
    pub struct SoundPlayer {
        output: Option<Output>,
        volume: f32,
    }

    impl SoundPlayer {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            let output = if enabled {
                match Output::open() {
                    Ok(output) => Some(output),
                    Err(err) => {
                        eprintln!("sound disabled: {err}");
                        None
                    }
                }
            } else {
                None
            };
            Self {
                output,
                volume: DEFAULT_VOLUME,
            }
        }

        pub fn start_ambience(&self) {
            if let Some(output) = &self.output {
                output.ambience.play();
            }
        }

        pub fn stop_ambience(&self) {
            if let Some(output) = &self.output {
                output.ambience.pause();
            }
        }

        /// Rising two-note blip for an eaten pellet.
        pub fn play_eat(&self) {
            self.play_notes(&[(660.0, 60), (880.0, 80)]);
        }

        /// Short descending run for the end of a round.
        pub fn play_death(&self) {
            self.play_notes(&[(220.0, 120), (165.0, 140), (110.0, 240)]);
        }

        pub fn volume_up(&mut self) {
            self.set_volume(self.volume + VOLUME_STEP);
        }

        pub fn volume_down(&mut self) {
            self.set_volume(self.volume - VOLUME_STEP);
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
            if let Some(output) = &self.output {
                output.ambience.set_volume(self.volume);
            }
        }

        fn play_notes(&self, notes: &[(f32, u64)]) {
            let Some(output) = &self.output else {
                return;
            };
            // A sink that cannot be opened mid-game just skips the effect.
            let Ok(sink) = Sink::try_new(&output.handle) else {
                return;
            };
            sink.set_volume(self.volume);
            for &(frequency, millis) in notes {
                sink.append(
                    SineWave::new(frequency)
                        .take_duration(Duration::from_millis(millis))
                        .amplify(0.25),
                );
            }
            sink.detach();
        }
    }
}

#[cfg(not(feature = "sound"))]
mod backend {
    /// Silent stand-in compiled when the `sound` feature is off. Keeps the
    /// call sites identical so the game loop never branches on the feature.
    pub struct SoundPlayer;

    impl SoundPlayer {
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self
        }

        pub fn start_ambience(&self) {}

        pub fn stop_ambience(&self) {}

        pub fn play_eat(&self) {}

        pub fn play_death(&self) {}

        pub fn volume_up(&mut self) {}

        pub fn volume_down(&mut self) {}
    }
}
