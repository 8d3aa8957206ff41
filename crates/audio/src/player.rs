//! Audio thread and the handle the game talks to.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};

use crate::tone::tones;
use crate::types::SoundEffect;

struct SoundThread {
    receiver: Receiver<SoundEffect>,
}

impl SoundThread {
    /// Open the output device and report back before serving requests.
    ///
    /// The stream has to be created on this thread: it is not `Send`.
    fn run(self, ready: mpsc::SyncSender<Result<(), String>>) {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                let _ = ready.send(Err(e.to_string()));
                return;
            }
        };
        // Keep the stream alive as long as the audio thread runs.
        let _stream = stream;
        if ready.send(Ok(())).is_err() {
            return;
        }

        while let Ok(effect) = self.receiver.recv() {
            play_effect(&handle, effect);
        }
        debug!("audio channel closed, stopping audio thread");
    }
}

/// Queue every tone of `effect` on the mixer, offset so they play in turn.
fn play_effect(handle: &OutputStreamHandle, effect: SoundEffect) {
    let mut offset = Duration::ZERO;
    for tone in tones(effect) {
        let source = SineWave::new(tone.freq_hz)
            .take_duration(tone.duration())
            .amplify(tone.volume)
            .delay(offset);
        if let Err(e) = handle.play_raw(source) {
            warn!("failed to play {} sound: {e}", effect.as_str());
            return;
        }
        offset += tone.duration();
    }
}

/// Handle to the audio thread.
///
/// Dropping it closes the channel and joins the thread.
pub struct AudioPlayer {
    sender: Option<Sender<SoundEffect>>,
    worker: Option<JoinHandle<()>>,
}

impl AudioPlayer {
    /// Start the audio thread on the default output device.
    ///
    /// Fails if the thread cannot be spawned or no output device can be
    /// opened.
    pub fn new() -> Result<Self> {
        let (sender, receiver) = mpsc::channel::<SoundEffect>();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);

        let sound_thread = SoundThread { receiver };
        let worker = thread::Builder::new()
            .name("space_wars_sound".into())
            .spawn(move || sound_thread.run(ready_tx))
            .context("failed to spawn audio thread")?;

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = worker.join();
                return Err(anyhow!(e)).context("failed to open default audio output");
            }
            Err(_) => {
                let _ = worker.join();
                return Err(anyhow!("audio thread exited during startup"));
            }
        }
        info!("audio output ready");

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// A player that drops every request. No thread, no device.
    pub fn silent() -> Self {
        Self {
            sender: None,
            worker: None,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.sender.is_none()
    }

    /// Request `effect`. Never blocks.
    pub fn play(&self, effect: SoundEffect) {
        let Some(sender) = &self.sender else {
            return;
        };
        if sender.send(effect).is_err() {
            warn!("audio thread is gone, dropping {} sound", effect.as_str());
        }
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        // Closing the channel ends the thread's receive loop.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("audio thread panicked");
            }
        }
    }
}
