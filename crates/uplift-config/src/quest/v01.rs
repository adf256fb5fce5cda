pub(crate) mod question;
pub(crate) mod quest;
pub(crate) mod section;
