// End-to-end tests for the audio backend HTTP API.
//
// Each test gets its own server on an ephemeral port, its own temporary
// output directory, and fake text/speech collaborators, so tests run in
// parallel without sharing state.

mod helpers;
mod test_immersion;
