use pdf_writer::Ref;
use std::collections::HashMap;

/// The indirect objects a document serializes, keyed by role rather than by
/// raw object number so that writers can reference each other out of order.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub(crate) enum ObjectKind {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    PageContent(usize),
    Font(usize),
    CidFont(usize),
    FontDescriptor(usize),
    FontData(usize),
    ToUnicode(usize),
}

/// Allocator for PDF object references. Each [ObjectKind] gets exactly one
/// [Ref], assigned on first request.
#[derive(Default)]
pub(crate) struct ObjectIds {
    assigned: HashMap<ObjectKind, Ref>,
    next: i32,
}

impl ObjectIds {
    pub fn new() -> ObjectIds {
        ObjectIds {
            assigned: HashMap::new(),
            next: 1,
        }
    }

    /// The reference for `kind`, allocating the next object number on first
    /// use
    pub fn entry(&mut self, kind: ObjectKind) -> Ref {
        if let Some(existing) = self.assigned.get(&kind) {
            return *existing;
        }
        let reference = Ref::new(self.next);
        self.next += 1;
        self.assigned.insert(kind, reference);
        reference
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_is_stable_per_kind() {
        let mut ids = ObjectIds::new();
        let a = ids.entry(ObjectKind::Catalog);
        let b = ids.entry(ObjectKind::PageTree);
        assert_ne!(a, b);
        assert_eq!(ids.entry(ObjectKind::Catalog), a);
        assert_eq!(ids.entry(ObjectKind::PageTree), b);
    }
}
