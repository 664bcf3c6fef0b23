use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct ClipPathEditor { pub(crate) inner: clippath::Editor }

impl ClipPathEditor {
    pub fn rs_new() -> ClipPathEditor { ClipPathEditor { inner: clippath::Editor::new() } }
    pub fn rs_edit_version(&self) -> u64 { self.inner.edit_version() }
    pub fn rs_inner(&self) -> &clippath::Editor { &self.inner }
}
