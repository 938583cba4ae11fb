mod vector;

pub use vector::BitVector;
