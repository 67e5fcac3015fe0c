//! Shared SeaORM building blocks for the query specifications

use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, Order, SimpleExpr},
    EntityName, EntityTrait, IdenStatic, QueryOrder, QuerySelect, Select,
};

use crate::domain::query::{NameFragment, Window};

/// `LOWER(table.column) LIKE '%fragment%' ESCAPE '\'`
pub(super) fn name_like<E: EntityTrait>(column: E::Column, fragment: &NameFragment) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((E::default(), column))))
        .like(LikeExpr::new(fragment.like_pattern()).escape('\\'))
}

/// Orders by `LOWER(column)` then `column`, both under the "C" collation so the
/// result matches `SortKey::Name` regardless of the database locale. Lowering
/// under "C" only folds ASCII letters.
pub(super) fn alphabetical<E: EntityTrait>(select: Select<E>, column: E::Column) -> Select<E> {
    let qualified = format!("\"{}\".\"{}\"", E::default().table_name(), column.as_str());
    select
        .order_by(
            Expr::cust(format!("LOWER({} COLLATE \"C\")", qualified)),
            Order::Asc,
        )
        .order_by(Expr::cust(format!("{} COLLATE \"C\"", qualified)), Order::Asc)
}

pub(super) fn windowed<E: EntityTrait>(select: Select<E>, window: &Window) -> Select<E> {
    let select = select.offset(window.offset);
    match window.limit {
        Some(limit) => select.limit(limit),
        None => select,
    }
}
