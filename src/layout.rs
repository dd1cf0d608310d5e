/// UV scale and offset that make a `video_w`x`video_h` image cover a
/// `surface_w`x`surface_h` surface without stretching, cropping the
/// overflowing axis symmetrically.
pub fn cover_fit(video_w: u32, video_h: u32, surface_w: u32, surface_h: u32) -> ([f32; 2], [f32; 2]) {
    if video_w == 0 || video_h == 0 || surface_w == 0 || surface_h == 0 {
        return ([1.0, 1.0], [0.0, 0.0]);
    }
    let video_aspect = video_w as f32 / video_h as f32;
    let surface_aspect = surface_w as f32 / surface_h as f32;
    let scale = if surface_aspect > video_aspect {
        [1.0, video_aspect / surface_aspect]
    } else {
        [surface_aspect / video_aspect, 1.0]
    };
    let offset = [(1.0 - scale[0]) * 0.5, (1.0 - scale[1]) * 0.5];
    (scale, offset)
}
