use sdl2::pixels::PixelFormatEnum;

use vip8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8::state::FrameBuffer;

/// # Display
/// The display is composed of 64x32 black/white pixels, scaled up by an
/// integer factor so they are visible on a modern screen.
///
/// FrameBuffer cells are full-width pixel values (all bits set when lit),
/// so the buffer blits straight into an RGBA8888 texture with no per-pixel
/// conversion. `render` is only called when the machine reports that a
/// cycle drew.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "vip8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Flattens a FrameBuffer into the byte stream SDL expects.
    ///
    /// Each cell already is a packed pixel value, so the rows concatenate
    /// and each cell serializes in native byte order.
    ///
    /// # Arguments
    /// * `frame` a FrameBuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|pixel| pixel.to_ne_bytes())
            .collect()
    }

    /// Uploads the FrameBuffer as an RGBA8888 texture and presents it.
    ///
    /// # Arguments
    /// * `frame` a FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA8888,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], _pitch: usize| {
            buffer.copy_from_slice(&Display::frame_to_sdl_texture(frame));
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = [[0; 64]; 32];
        frame[0][1] = u32::MAX;
        frame[1][0] = u32::MAX;
        let bytes = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 64 * 32 * 4];
        expected[4..8].copy_from_slice(&[255; 4]);
        expected[256..260].copy_from_slice(&[255; 4]);

        assert_eq!(bytes, expected);
    }
}
