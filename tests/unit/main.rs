//! Unit test suite mirroring the src module tree

mod assets;
