/// A synthesizable voice offered by the premium speech provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    pub id: &'static str,
    pub name: &'static str,
}

const VOICES: [VoiceProfile; 6] = [
    VoiceProfile {
        id: "TxGEqnHWrfWFTfGW9XjX",
        name: "Josh",
    },
    VoiceProfile {
        id: "pNInz6obpgDQGcFmaJgB",
        name: "Adam",
    },
    VoiceProfile {
        id: "onwK4e9ZLuTAKqWW03F9",
        name: "James",
    },
    VoiceProfile {
        id: "yoZ06aMxZJJ28mfd3POQ",
        name: "Sam",
    },
    VoiceProfile {
        id: "VR6AewLTigWG4xSOukaG",
        name: "Arnold",
    },
    VoiceProfile {
        id: "EXAVITQu4vr4xnSDxMaL",
        name: "Bella",
    },
];

/// Fixed, ordered voice catalog addressed by index.
pub struct VoiceCatalog;

impl VoiceCatalog {
    pub fn voices() -> &'static [VoiceProfile] {
        &VOICES
    }

    pub fn len() -> usize {
        VOICES.len()
    }

    /// Indices outside the catalog fall back to the last voice.
    pub fn resolve(index: i32) -> &'static VoiceProfile {
        usize::try_from(index)
            .ok()
            .and_then(|i| VOICES.get(i))
            .unwrap_or(&VOICES[VOICES.len() - 1])
    }
}
