// Ingestion boundary: accepts an uploaded document or raw text, dispatches to
// the text-extraction collaborator by declared media type, and runs the
// heuristic core. All failure handling lives here — the core cannot fail.

pub mod handlers;
