use super::Builder;

/// `DELETE`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delete;

impl Delete {
    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("DELETE");
    }
}
