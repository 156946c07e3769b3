//! `SHP` sprite sheet format (§6): a 3-byte header, then raw frame data.

use platformer_core::types::Facing;

use super::{require_len, AssetError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalMode {
    /// Left-facing frames are mirrored for right-facing at render time; the
    /// frame table holds only the left-facing frames.
    Duplicated,
    /// The frame table holds left-facing frames followed by right-facing frames.
    Separate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Loop,
    Alternate,
}

#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub num_frames: usize,
    pub horizontal: HorizontalMode,
    pub animation: AnimationMode,
    frame_bytes: usize,
    raw_frames: Vec<u8>,
}

impl SpriteSheet {
    /// Parses a `SHP` sheet. `frame_bytes` is the byte size of one raw frame
    /// (16×16/16×8/16×32 masked sprite data), supplied by the caller because
    /// it is determined by which of the three render calls this sheet feeds
    /// (§6), not by the SHP format itself.
    pub fn parse(data: &[u8], frame_bytes: usize) -> Result<Self, AssetError> {
        require_len(data, 3)?;
        let num_frames = data[0] as usize;
        let horizontal = match data[1] {
            1 => HorizontalMode::Duplicated,
            2 => HorizontalMode::Separate,
            other => {
                return Err(AssetError::InvalidHeader {
                    field: "horizontal",
                    value: other as u32,
                })
            }
        };
        let animation = match data[2] {
            0 => AnimationMode::Loop,
            1 => AnimationMode::Alternate,
            other => {
                return Err(AssetError::InvalidHeader {
                    field: "animation",
                    value: other as u32,
                })
            }
        };

        let raw_frame_count = match horizontal {
            HorizontalMode::Duplicated => num_frames,
            HorizontalMode::Separate => num_frames * 2,
        };
        let body = &data[3..];
        require_len(body, raw_frame_count * frame_bytes)?;

        Ok(Self {
            num_frames,
            horizontal,
            animation,
            frame_bytes,
            raw_frames: body[..raw_frame_count * frame_bytes].to_vec(),
        })
    }

    /// Maps an animation index and facing to raw frame bytes, implementing
    /// the `Alternate`/`Loop` × `Duplicated`/`Separate` selection rule (§6).
    pub fn frame_for(&self, anim_index: usize, facing: Facing) -> &[u8] {
        let logical = self.logical_frame_index(anim_index);
        let raw_index = match self.horizontal {
            HorizontalMode::Duplicated => logical,
            HorizontalMode::Separate => match facing {
                Facing::Left => logical,
                Facing::Right => logical + self.num_frames,
            },
        };
        let start = raw_index * self.frame_bytes;
        &self.raw_frames[start..start + self.frame_bytes]
    }

    fn logical_frame_index(&self, anim_index: usize) -> usize {
        let n = self.num_frames.max(1);
        match self.animation {
            AnimationMode::Loop => anim_index % n,
            AnimationMode::Alternate => {
                if n <= 1 {
                    return 0;
                }
                let period = 2 * (n - 1);
                let phase = anim_index % period;
                if phase < n {
                    phase
                } else {
                    period - phase
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(num_frames: u8, horizontal: u8, animation: u8, frame_bytes: usize) -> SpriteSheet {
        let raw_frame_count = if horizontal == 2 {
            num_frames as usize * 2
        } else {
            num_frames as usize
        };
        let mut data = vec![num_frames, horizontal, animation];
        for i in 0..raw_frame_count {
            data.extend(std::iter::repeat(i as u8).take(frame_bytes));
        }
        SpriteSheet::parse(&data, frame_bytes).expect("parses")
    }

    #[test]
    fn loop_mode_wraps() {
        let s = sheet(3, 1, 0, 4);
        assert_eq!(s.frame_for(0, Facing::Left)[0], 0);
        assert_eq!(s.frame_for(1, Facing::Left)[0], 1);
        assert_eq!(s.frame_for(3, Facing::Left)[0], 0);
    }

    #[test]
    fn alternate_mode_mirrors_back() {
        let s = sheet(4, 1, 1, 4);
        let sequence: Vec<u8> = (0..6).map(|i| s.frame_for(i, Facing::Left)[0]).collect();
        assert_eq!(sequence, vec![0, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn separate_horizontal_selects_right_half() {
        let s = sheet(2, 2, 0, 4);
        assert_eq!(s.frame_for(0, Facing::Left)[0], 0);
        assert_eq!(s.frame_for(0, Facing::Right)[0], 2);
    }

    #[test]
    fn duplicated_horizontal_ignores_facing() {
        let s = sheet(2, 1, 0, 4);
        assert_eq!(s.frame_for(1, Facing::Left)[0], s.frame_for(1, Facing::Right)[0]);
    }
}
