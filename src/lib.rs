pub mod check;
pub mod codec;
pub mod constants;
pub mod data;
pub mod decode;
pub mod derive;
pub mod launch;
pub mod resolve;
pub mod transaction;
