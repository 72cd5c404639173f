pub mod blur;
pub mod channels;
pub mod pipeline;
pub mod reconstruct;
pub mod sampler;
