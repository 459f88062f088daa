//! Workspace-level integration tests for fftconv; see `tests/`.
