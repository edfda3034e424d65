pub mod codec_decoder;
