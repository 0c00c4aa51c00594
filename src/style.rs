//! Stylesheet
//!
//! Injected once by `App`; class names match the components.

pub const STYLESHEET: &str = r#"
body { margin: 0; }
.sn-app { font-family: Inter, sans-serif; height: 100vh; display: flex; flex-direction: column; }
.sn-container-wrap { flex: 1; padding: 20px; box-sizing: border-box; }
.sn-container { border: 2px dashed #e2e8f0; border-radius: 10px; height: 100%; position: relative; overflow: auto; background: #fafafa; }
.sn-note { position: absolute; width: 220px; min-height: 140px; box-shadow: 0 6px 14px rgba(15,23,42,0.12); border-radius: 8px; padding: 10px; box-sizing: border-box; cursor: grab; display: flex; flex-direction: column; }
.sn-note.dragging { cursor: grabbing; opacity: 0.95; }
.sn-note .note-header { display: flex; justify-content: flex-end; }
.sn-note .note-body { flex: 1; margin-top: 6px; }
.sn-note textarea { width: 100%; height: 100%; min-height: 96px; resize: none; border: none; outline: none; background: transparent; font-size: 14px; font-family: inherit; }
.sn-add-btn { position: fixed; right: 24px; bottom: 24px; width: 56px; height: 56px; border-radius: 999px; background: #111827; color: #fff; display: flex; align-items: center; justify-content: center; box-shadow: 0 8px 24px rgba(15,23,42,0.32); border: none; cursor: pointer; font-size: 24px; }
.sn-close-btn { background: rgba(0,0,0,0.06); border: none; width: 28px; height: 28px; border-radius: 6px; display: flex; align-items: center; justify-content: center; cursor: pointer; font-size: 16px; }
.sn-icon { line-height: 1; pointer-events: none; }
"#;
