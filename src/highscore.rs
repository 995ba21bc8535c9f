//! Persisted best-score scalar
//!
//! Stored in LocalStorage as a bare stringified number; absent or unparsable
//! values fall back to zero.

/// The best completed-run score seen on this browser
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HighScore {
    pub points: f64,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "speaker_cam_highscore";

    /// Offer a completed run's score. Keeps the larger value; returns `true`
    /// when the record was beaten (caller should persist).
    pub fn record(&mut self, score: f64) -> bool {
        if score > self.points {
            self.points = score;
            true
        } else {
            false
        }
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(points) = raw.parse::<f64>() {
                    log::info!("Loaded high score: {}", points.floor());
                    return Self {
                        points: points.max(0.0),
                    };
                }
                log::warn!("Stored high score unparsable, starting from 0");
            }
        }

        Self::default()
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.points.to_string());
            log::info!("High score saved: {}", self.points.floor());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
