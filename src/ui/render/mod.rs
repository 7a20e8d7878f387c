mod about;
mod all;
mod contact;
mod footer;
mod home;
mod intro;
mod log;
mod not_found;
mod projects;
mod top_menu;

use self::log::log;
use super::*;
use about::about;
use contact::contact;
use footer::footer;
use home::home;
use intro::intro;
use not_found::not_found;
use projects::projects;
use top_menu::top_menu;

pub use all::all as render;
