mod make_hexahedron;

pub use make_hexahedron::{MakeHexahedron, HEXAHEDRON_FACES};
