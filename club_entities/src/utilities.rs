use itertools::Itertools;
use sea_orm::prelude::*;
use sea_orm::IntoActiveModel;


fn uuid_of(value: sea_orm::Value) -> Option<Uuid> {
    match value {
        sea_orm::Value::Uuid(Some(val)) => Some(*val),
        _ => None
    }
}

/// Bound parameters allowed in one statement. SQLite builds before 3.32 reject more than 999.
pub const MAX_BOUND_PARAMETERS: usize = 999;

/// Rows that fit into one multi-row insert when each row binds `params_per_row` values.
pub fn rows_per_statement(params_per_row: usize) -> usize {
    (MAX_BOUND_PARAMETERS / params_per_row.max(1)).max(1)
}

/// All rows of `E` whose `col` is one of `ids`, queried in chunks that stay under
/// the parameter limit. The result carries no particular order.
pub async fn find_by_ids<E, Conn>(db: &Conn, col: E::Column, ids: Vec<Uuid>) -> Result<Vec<E::Model>, DbErr> where E: EntityTrait, Conn: ConnectionTrait {
    let ids = ids.into_iter().unique().collect_vec();
    let mut models = Vec::with_capacity(ids.len());
    for chunk in ids.chunks(MAX_BOUND_PARAMETERS) {
        models.extend(E::find().filter(col.is_in(chunk.to_vec())).all(db).await?);
    }
    Ok(models)
}

/// Splits rows keyed by uuid into updates and inserts and applies them.
#[derive(Debug)]
pub struct ChangeSet<A> {
    pub update: Vec<A>,
    pub insert: Vec<A>,
}

impl<A, E> ChangeSet<A> where A: ActiveModelTrait<Entity = E> + Send, E: EntityTrait, <E as EntityTrait>::Model: IntoActiveModel<A> {
    pub fn new() -> ChangeSet<A> {
        ChangeSet {
            update: vec![],
            insert: vec![],
        }
    }

    pub fn push(&mut self, model: A, exists: bool) {
        if exists {
            self.update.push(model);
        }
        else {
            self.insert.push(model);
        }
    }

    pub async fn exec<Conn>(self, db: &Conn) -> Result<(), DbErr> where Conn: ConnectionTrait {
        for e in self.insert.into_iter() {
            E::insert(e).exec_without_returning(db).await?;
        }

        for m in self.update.into_iter() {
            E::update(m).exec(db).await?;
        }

        Ok(())
    }
}

/// Returns the subset of `uuids` that already exist in the table of `E`.
pub async fn existing_ids<E, Conn>(db: &Conn, id_col: E::Column, uuids: Vec<Uuid>) -> Result<std::collections::HashSet<Uuid>, DbErr> where E: EntityTrait, Conn: ConnectionTrait {
    let models = find_by_ids::<E, Conn>(db, id_col, uuids).await?;
    Ok(models.into_iter().filter_map(|m| uuid_of(m.get(id_col))).collect())
}
