pub mod client;
pub mod error;
pub mod result;
pub mod server;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::models::{
    point::Point, raster::RasterImage, render_request::RenderRequest, viewport::Viewport,
};

use self::result::ChannelResult;

/// Request wire image: a connection flag byte, the pixel dimensions and the
/// four plane corner coordinates, every field little-endian.
///
/// ```text
/// [0]      connection_ok: u8, 0 is the shutdown sentinel
/// [1..5]   width_px:  u32
/// [5..9]   height_px: u32
/// [9..17]  top_left.x:     f64
/// [17..25] top_left.y:     f64
/// [25..33] bottom_right.x: f64
/// [33..41] bottom_right.y: f64
/// ```
pub const REQUEST_WIRE_SIZE: usize = 41;

pub fn encode_request(request: &RenderRequest) -> [u8; REQUEST_WIRE_SIZE] {
    let mut frame = [0u8; REQUEST_WIRE_SIZE];
    let viewport = &request.viewport;

    frame[0] = request.connection_ok as u8;
    frame[1..5].copy_from_slice(&viewport.width_px.to_le_bytes());
    frame[5..9].copy_from_slice(&viewport.height_px.to_le_bytes());
    frame[9..17].copy_from_slice(&viewport.top_left.x.to_le_bytes());
    frame[17..25].copy_from_slice(&viewport.top_left.y.to_le_bytes());
    frame[25..33].copy_from_slice(&viewport.bottom_right.x.to_le_bytes());
    frame[33..41].copy_from_slice(&viewport.bottom_right.y.to_le_bytes());

    frame
}

pub fn decode_request(frame: &[u8; REQUEST_WIRE_SIZE]) -> RenderRequest {
    let viewport = Viewport::new(
        read_u32(frame, 1),
        read_u32(frame, 5),
        Point::new(read_f64(frame, 9), read_f64(frame, 17)),
        Point::new(read_f64(frame, 25), read_f64(frame, 33)),
    );

    RenderRequest {
        connection_ok: frame[0] != 0,
        viewport,
    }
}

fn read_u32(frame: &[u8; REQUEST_WIRE_SIZE], at: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&frame[at..at + 4]);
    u32::from_le_bytes(bytes)
}

fn read_f64(frame: &[u8; REQUEST_WIRE_SIZE], at: usize) -> f64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&frame[at..at + 8]);
    f64::from_le_bytes(bytes)
}

pub async fn write_request<W>(channel: &mut W, request: &RenderRequest) -> ChannelResult<()>
where
    W: AsyncWrite + Unpin,
{
    let frame = encode_request(request);
    channel.write_all(&frame).await?;
    Ok(channel.flush().await?)
}

pub async fn read_request<R>(channel: &mut R) -> ChannelResult<RenderRequest>
where
    R: AsyncRead + Unpin,
{
    let mut frame = [0u8; REQUEST_WIRE_SIZE];
    channel.read_exact(&mut frame).await?;
    Ok(decode_request(&frame))
}

/// Writes a frame as raw bytes. The receiver knows the dimensions from the
/// request it sent, so there is no header to frame it.
pub async fn write_raster<W>(channel: &mut W, raster: &RasterImage) -> ChannelResult<()>
where
    W: AsyncWrite + Unpin,
{
    channel.write_all(raster.as_bytes()).await?;
    Ok(channel.flush().await?)
}

/// Reads exactly one frame of the given dimensions; anything short of
/// `width_px * height_px * 3` bytes is a channel error.
pub async fn read_raster<R>(
    channel: &mut R,
    width_px: u32,
    height_px: u32,
) -> ChannelResult<RasterImage>
where
    R: AsyncRead + Unpin,
{
    let mut data = vec![0u8; RasterImage::byte_len(width_px, height_px)];
    channel.read_exact(&mut data).await?;
    Ok(RasterImage::from_bytes(width_px, height_px, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networking::error::ChannelError;
    use tokio::io::{duplex, AsyncWriteExt};

    fn sample_request() -> RenderRequest {
        RenderRequest::render(Viewport::new(
            600,
            720,
            Point::new(-2.0, 1.5),
            Point::new(0.5, -1.5),
        ))
    }

    #[test]
    fn request_layout_is_field_by_field_little_endian() {
        let frame = encode_request(&sample_request());

        assert_eq!(frame.len(), REQUEST_WIRE_SIZE);
        assert_eq!(frame[0], 1);
        assert_eq!(frame[1..5], 600u32.to_le_bytes());
        assert_eq!(frame[5..9], 720u32.to_le_bytes());
        assert_eq!(frame[9..17], (-2.0f64).to_le_bytes());
        assert_eq!(frame[17..25], 1.5f64.to_le_bytes());
        assert_eq!(frame[25..33], 0.5f64.to_le_bytes());
        assert_eq!(frame[33..41], (-1.5f64).to_le_bytes());
    }

    #[test]
    fn request_codec_round_trips() {
        let request = sample_request();
        assert_eq!(decode_request(&encode_request(&request)), request);
    }

    #[test]
    fn sentinel_flag_survives_the_wire() {
        let frame = encode_request(&RenderRequest::shutdown());
        assert_eq!(frame[0], 0);
        assert!(decode_request(&frame).is_shutdown());
    }

    #[test]
    fn any_nonzero_flag_byte_means_continue() {
        let mut frame = encode_request(&RenderRequest::shutdown());
        frame[0] = 0x7f;
        assert!(!decode_request(&frame).is_shutdown());
    }

    #[tokio::test]
    async fn request_survives_an_async_channel() {
        let (mut near, mut far) = duplex(64);
        let request = sample_request();

        write_request(&mut near, &request).await.unwrap();
        assert_eq!(read_request(&mut far).await.unwrap(), request);
    }

    #[tokio::test]
    async fn a_short_request_frame_is_an_io_error() {
        let (mut near, mut far) = duplex(64);
        near.write_all(&[1u8; 10]).await.unwrap();
        drop(near);

        let err = read_request(&mut far).await.unwrap_err();
        assert!(matches!(err, ChannelError::Io(_)));
    }

    #[tokio::test]
    async fn raster_bytes_cross_the_channel_headerless() {
        let (mut near, mut far) = duplex(256);
        let raster = RasterImage::from_bytes(2, 2, (0..12).collect());

        write_raster(&mut near, &raster).await.unwrap();
        drop(near);

        let received = read_raster(&mut far, 2, 2).await.unwrap();
        assert_eq!(received, raster);

        // Nothing but the pixel bytes was written.
        let mut rest = Vec::new();
        far.read_to_end(&mut rest).await.unwrap();
        assert!(rest.is_empty());
    }

    #[tokio::test]
    async fn a_short_raster_is_an_io_error() {
        let (mut near, mut far) = duplex(256);
        near.write_all(&[0u8; 7]).await.unwrap();
        drop(near);

        let err = read_raster(&mut far, 2, 2).await.unwrap_err();
        assert!(matches!(err, ChannelError::Io(_)));
    }
}
