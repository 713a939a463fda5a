mod library_gate;

pub use library_gate::LibraryComponentGate;
