//! State behind the create/edit/delete dialogs.
//!
//! DESIGN
//! ======
//! A dialog is either closed or busy with exactly one action, and the edit
//! and delete actions own their target. Holding that as one tagged union
//! rules out "delete dialog open with no post selected" and the like.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use std::fmt::Debug;

use crate::model::{Comment, CommentForm, Post, PostForm};
use crate::mutation::Mutation;

/// The action a dialog is currently performing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogAction<T> {
    #[default]
    Closed,
    Creating,
    Editing(T),
    Deleting(T),
}

impl<T> DialogAction<T> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating)
    }

    #[must_use]
    pub fn editing(&self) -> Option<&T> {
        match self {
            Self::Editing(target) => Some(target),
            _ => None,
        }
    }

    #[must_use]
    pub fn deleting(&self) -> Option<&T> {
        match self {
            Self::Deleting(target) => Some(target),
            _ => None,
        }
    }
}

/// An entity the dialogs can create, edit and delete.
pub trait Editable: Clone + Debug + PartialEq {
    /// Draft edited in the dialog form.
    type Form: Clone + Debug + Default + PartialEq + for<'a> From<&'a Self>;
    /// Context a new entity is created in (the parent post for comments).
    type Scope: Copy;

    fn create(scope: Self::Scope, form: &Self::Form) -> Mutation;
    fn edit(&self, form: &Self::Form) -> Mutation;
    fn delete(&self) -> Mutation;
}

impl Editable for Post {
    type Form = PostForm;
    type Scope = ();

    fn create((): (), form: &PostForm) -> Mutation {
        Mutation::CreatePost(form.clone())
    }

    fn edit(&self, form: &PostForm) -> Mutation {
        Mutation::EditPost { id: self.id, form: form.clone() }
    }

    fn delete(&self) -> Mutation {
        Mutation::DeletePost { id: self.id }
    }
}

impl Editable for Comment {
    type Form = CommentForm;
    type Scope = i64;

    fn create(post_id: i64, form: &CommentForm) -> Mutation {
        Mutation::CreateComment { post_id, form: form.clone() }
    }

    fn edit(&self, form: &CommentForm) -> Mutation {
        Mutation::EditComment { post_id: self.post_id, id: self.id, form: form.clone() }
    }

    fn delete(&self) -> Mutation {
        Mutation::DeleteComment { id: self.id }
    }
}

/// Dialog action plus the form draft it edits.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityDialog<T: Editable> {
    action: DialogAction<T>,
    form: T::Form,
}

impl<T: Editable> Default for EntityDialog<T> {
    fn default() -> Self {
        Self { action: DialogAction::Closed, form: T::Form::default() }
    }
}

impl<T: Editable> EntityDialog<T> {
    #[must_use]
    pub fn action(&self) -> &DialogAction<T> {
        &self.action
    }

    #[must_use]
    pub fn form(&self) -> &T::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut T::Form {
        &mut self.form
    }

    pub fn open_create(&mut self) {
        self.action = DialogAction::Creating;
        self.form = T::Form::default();
    }

    /// Open the edit form pre-filled from `target`.
    pub fn open_edit(&mut self, target: T) {
        self.form = T::Form::from(&target);
        self.action = DialogAction::Editing(target);
    }

    pub fn open_delete(&mut self, target: T) {
        self.action = DialogAction::Deleting(target);
    }

    /// Close and discard the draft.
    pub fn close(&mut self) {
        self.action = DialogAction::Closed;
        self.form = T::Form::default();
    }

    /// The call a confirm click would make, if the dialog is open.
    #[must_use]
    pub fn pending(&self, scope: T::Scope) -> Option<Mutation> {
        match &self.action {
            DialogAction::Closed => None,
            DialogAction::Creating => Some(T::create(scope, &self.form)),
            DialogAction::Editing(target) => Some(target.edit(&self.form)),
            DialogAction::Deleting(target) => Some(target.delete()),
        }
    }

    /// Close once the call for `submitted` has completed. A dialog reopened
    /// on another action in the meantime keeps its state. Returns whether it closed.
    pub fn settle(&mut self, submitted: &DialogAction<T>) -> bool {
        if self.action != *submitted {
            return false;
        }
        self.close();
        true
    }
}
