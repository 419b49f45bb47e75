mod handler;
mod query;

pub use handler::*;
pub use query::*;

use crate::{
    item::{validate, Choice},
    Result,
};

use super::QueryBuilder;

fn collect<T, C>(choices: impl IntoIterator<Item = C>) -> Result<Vec<Choice<T>>>
where
    T: PartialEq,
    C: Into<Choice<T>>,
{
    let choices: Vec<Choice<T>> = choices.into_iter().map(Into::into).collect();
    validate(&choices)?;
    Ok(choices)
}

impl<'a> QueryBuilder<'a> {
    /// Fails if `choices` is empty or two choices share a value.
    pub fn select<T, C>(self, choices: impl IntoIterator<Item = C>) -> Result<SelectQuery<'a, T>>
    where
        T: PartialEq,
        C: Into<Choice<T>>,
    {
        let choices = collect(choices)?;
        Ok(SelectQuery::new(self.session(), choices))
    }

    /// Fails if `choices` is empty or two choices share a value.
    pub fn multi_select<T, C>(
        self,
        choices: impl IntoIterator<Item = C>,
    ) -> Result<MultiSelectQuery<'a, T>>
    where
        T: PartialEq,
        C: Into<Choice<T>>,
    {
        let choices = collect(choices)?;
        Ok(MultiSelectQuery::new(self.session(), choices))
    }

    pub fn confirm(self) -> SelectQuery<'a, bool> {
        SelectQuery::new(
            self.session(),
            vec![Choice::new("Yes", true), Choice::new("No", false)],
        )
    }
}
