mod fraction;

pub use self::fraction::*;
