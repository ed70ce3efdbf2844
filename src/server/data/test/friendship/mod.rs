use crate::server::{
    data::friendship::FriendshipRepository, model::friendship::MutualFriendshipParams,
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, ModelTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_mutual_many;
mod get_friends;
