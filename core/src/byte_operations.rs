//! Little-endian byte readers and the RLE codec shared by the asset parsers.

/// Reads a `u8` from `$bytes` at `$offset` and advances `$offset` by 1.
#[macro_export]
macro_rules! read_u8 {
    ($bytes:expr, $offset:expr) => {{
        let val = $bytes[$offset];
        $offset += 1;
        val
    }};
}

/// Reads a little-endian `u16` from `$bytes` at `$offset` and advances `$offset` by 2.
#[macro_export]
macro_rules! read_u16 {
    ($bytes:expr, $offset:expr) => {{
        let val = u16::from_le_bytes([$bytes[$offset], $bytes[$offset + 1]]);
        $offset += 2;
        val
    }};
}

/// Decodes a planar RLE buffer (EGA fullscreen image format, §6).
///
/// Control byte `< 0x80` introduces that many literal bytes; `>= 0x80` repeats
/// the following byte `b - 127` times. Decoding stops once `out_len` bytes have
/// been produced or the input is exhausted.
pub fn rle_decode(input: &[u8], out_len: usize) -> Vec<u8> {
    rle_decode_from(input, out_len).0
}

/// Like `rle_decode`, but also returns how many bytes of `input` were
/// consumed — needed to decode several planes back-to-back out of one
/// concatenated RLE stream (the EGA fullscreen format packs four of them).
pub fn rle_decode_from(input: &[u8], out_len: usize) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(out_len);
    let mut i = 0;
    while out.len() < out_len && i < input.len() {
        let control = input[i];
        i += 1;
        if control < 0x80 {
            let count = control as usize;
            let end = (i + count).min(input.len());
            out.extend_from_slice(&input[i..end]);
            i = end;
        } else {
            let count = (control - 127) as usize;
            if i >= input.len() {
                break;
            }
            let value = input[i];
            i += 1;
            let take = count.min(out_len - out.len());
            out.extend(std::iter::repeat(value).take(take));
        }
    }
    (out, i)
}

/// Encodes `input` with the same RLE scheme `rle_decode` understands.
///
/// Never emits a repeat run for a match shorter than 2 bytes (those are folded
/// into the surrounding literal run instead), so `rle_decode(rle_encode(x), x.len()) == x`
/// holds without needing to special-case a zero-length repeat.
pub fn rle_encode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;
    let mut literal_start = 0;

    fn flush_literal(out: &mut Vec<u8>, input: &[u8], start: usize, end: usize) {
        let mut pos = start;
        while pos < end {
            let chunk = (end - pos).min(0x7F);
            out.push(chunk as u8);
            out.extend_from_slice(&input[pos..pos + chunk]);
            pos += chunk;
        }
    }

    while i < input.len() {
        let mut run = 1;
        while i + run < input.len() && input[i + run] == input[i] && run < 128 {
            run += 1;
        }
        if run >= 2 {
            flush_literal(&mut out, input, literal_start, i);
            out.push((run + 127) as u8);
            out.push(input[i]);
            i += run;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    flush_literal(&mut out, input, literal_start, input.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u8_advances_offset() {
        let bytes = [42u8, 100, 200];
        let mut offset = 0;
        assert_eq!(read_u8!(bytes, offset), 42);
        assert_eq!(offset, 1);
        assert_eq!(read_u8!(bytes, offset), 100);
        assert_eq!(offset, 2);
    }

    #[test]
    fn read_u16_is_little_endian() {
        let bytes = [0x01, 0x02, 0xFF, 0xFF];
        let mut offset = 0;
        assert_eq!(read_u16!(bytes, offset), 0x0201);
        assert_eq!(offset, 2);
        assert_eq!(read_u16!(bytes, offset), 0xFFFF);
        assert_eq!(offset, 4);
    }

    #[test]
    fn rle_round_trips_mixed_runs() {
        let data: Vec<u8> = vec![1, 1, 1, 1, 2, 3, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9];
        let encoded = rle_encode(&data);
        let decoded = rle_decode(&encoded, data.len());
        assert_eq!(decoded, data);
    }

    #[test]
    fn rle_round_trips_all_literal() {
        let data: Vec<u8> = (0..200).map(|n| (n % 251) as u8).collect();
        let encoded = rle_encode(&data);
        let decoded = rle_decode(&encoded, data.len());
        assert_eq!(decoded, data);
    }

    #[test]
    fn rle_decode_accepts_0x80_control_byte() {
        // 0x80 => repeat count (0x80 - 127) = 1, one literal-looking repeat of the next byte.
        let encoded = [0x80u8, 0x07];
        let decoded = rle_decode(&encoded, 1);
        assert_eq!(decoded, vec![0x07]);
    }

    #[test]
    fn rle_empty_round_trips() {
        let data: Vec<u8> = vec![];
        let encoded = rle_encode(&data);
        let decoded = rle_decode(&encoded, 0);
        assert_eq!(decoded, data);
    }
}
