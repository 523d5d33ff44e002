//! Default `MediaDecoder` backed by symphonia.

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::models::audio::DecodedAudio;
use crate::models::error::ConvertError;
use crate::traits::media_decoder::MediaDecoder;

/// Decodes in-memory blobs through symphonia's probe-and-decode pipeline.
///
/// Accepts whatever the enabled symphonia features cover; anything else
/// surfaces as `ConvertError::DecodeFailed`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaDecoder;

impl MediaDecoder for SymphoniaDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedAudio, ConvertError> {
        let source = Cursor::new(bytes.to_vec());
        let stream = MediaSourceStream::new(Box::new(source), Default::default());

        let probed = symphonia::default::get_probe()
            .format(
                &Hint::new(),
                stream,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(decode_err)?;
        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| ConvertError::DecodeFailed("no default audio track".into()))?;
        let track_id = track.id;
        let mut sample_rate = track.codec_params.sample_rate;
        let mut channel_count = track.codec_params.channels.map(|c| c.count());

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(decode_err)?;

        let mut interleaved: Vec<f32> = Vec::new();
        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => return Err(decode_err(e)),
            };
            if packet.track_id() != track_id {
                continue;
            }
            match decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    sample_rate.get_or_insert(spec.rate);
                    channel_count.get_or_insert(spec.channels.count());
                    let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                    buffer.copy_interleaved_ref(decoded);
                    interleaved.extend_from_slice(buffer.samples());
                }
                // Skip corrupt packets, keep decoding the rest of the stream.
                Err(Error::DecodeError(_)) => continue,
                Err(e) => return Err(decode_err(e)),
            }
        }

        let channels = channel_count
            .filter(|&count| count > 0)
            .ok_or_else(|| ConvertError::DecodeFailed("unknown channel count".into()))?;
        let sample_rate = sample_rate
            .ok_or_else(|| ConvertError::DecodeFailed("unknown sample rate".into()))?;
        if interleaved.is_empty() {
            return Err(ConvertError::DecodeFailed("no audio frames decoded".into()));
        }

        Ok(DecodedAudio::new(
            deinterleave(&interleaved, channels),
            sample_rate,
        ))
    }
}

/// Split interleaved samples into per-channel planes.
fn deinterleave(samples: &[f32], channels: usize) -> Vec<Vec<f32>> {
    let frames = samples.len() / channels;
    let mut planes = vec![Vec::with_capacity(frames); channels];
    for frame in samples.chunks_exact(channels) {
        for (plane, &sample) in planes.iter_mut().zip(frame) {
            plane.push(sample);
        }
    }
    planes
}

fn decode_err(e: Error) -> ConvertError {
    ConvertError::DecodeFailed(e.to_string())
}
