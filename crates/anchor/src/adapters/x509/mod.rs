// X.509 adapter - name constraints decoding and encoded input parsing

mod decoder;
mod dn;
mod parse;

pub use decoder::*;
pub use parse::*;
