//! Document sequencing state.

/// Control number and sequence bookkeeping for one document.
///
/// One global counter ticks for every emitted line. Three parent trackers
/// follow the hierarchy: a material line becomes the parent of subsequent
/// label lines; a label line becomes the parent of its own free-text and
/// characteristic lines. The material line itself back-references the
/// counter value preceding its own; that off-by-one is part of the wire
/// format and is preserved exactly.
#[derive(Debug, Clone)]
pub struct ControlState {
    control_number: String,
    sequence: u32,
    label_parent: u32,
    text_parent: u32,
    characteristic_parent: u32,
    last_material: String,
}

impl ControlState {
    pub fn new(control_number: &str) -> Self {
        Self {
            control_number: control_number.to_string(),
            sequence: 1,
            label_parent: 1,
            text_parent: 0,
            characteristic_parent: 0,
            last_material: String::new(),
        }
    }

    pub fn control_number(&self) -> &str {
        &self.control_number
    }

    /// True when the record's material should emit a block: non-empty and
    /// different from the last material emitted (tracked across records).
    pub fn material_is_new(&self, material: &str) -> bool {
        !material.is_empty() && material != self.last_material
    }

    /// Claim sequence numbers for a material line: (own, parent).
    /// The new material becomes the parent of subsequent label lines.
    pub fn material_line(&mut self, material: &str) -> (u32, u32) {
        let own = self.next_sequence();
        self.label_parent = own;
        self.last_material = material.to_string();
        (own, own - 1)
    }

    /// Claim sequence numbers for a label line: (own, parent).
    /// The label becomes the parent for its text and characteristic lines.
    pub fn label_line(&mut self) -> (u32, u32) {
        let own = self.next_sequence();
        let parent = self.label_parent;
        self.text_parent = own;
        self.characteristic_parent = own;
        (own, parent)
    }

    /// Claim sequence numbers for one free-text line: (own, parent).
    /// Every text line of a record points at the label, not at the
    /// preceding text line.
    pub fn text_line(&mut self) -> (u32, u32) {
        (self.next_sequence(), self.text_parent)
    }

    /// Claim sequence numbers for one characteristic line: (own, parent).
    pub fn characteristic_line(&mut self) -> (u32, u32) {
        (self.next_sequence(), self.characteristic_parent)
    }

    fn next_sequence(&mut self) -> u32 {
        let own = self.sequence;
        self.sequence += 1;
        own
    }
}
