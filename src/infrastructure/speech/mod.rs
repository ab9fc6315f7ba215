mod edge_tts_synthesizer;
mod eleven_labs_synthesizer;

pub use edge_tts_synthesizer::{
    DEFAULT_PROGRAM as EDGE_TTS_PROGRAM, DEFAULT_VOICE as EDGE_TTS_VOICE, EdgeTtsSynthesizer,
};
pub use eleven_labs_synthesizer::ElevenLabsSynthesizer;
