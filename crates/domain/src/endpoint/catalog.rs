//! The server operations used by the client.
//!
//! Paths, methods and default payloads are the server contract and must
//! not change. Search keywords are percent-encoded before being placed in
//! the path.

#![allow(missing_docs)]

use chrono::NaiveDate;

use super::descriptor::{CallOptions, Endpoint, Id};

/// Default payload of the public authentication endpoints.
const PUBLIC_APP: &[(&str, &str)] = &[("app", "public")];

/// Marks left as-is besides the unreserved set, as `encodeURIComponent` does.
const KEPT_MARKS: &[char] = &['!', '\'', '(', ')', '*'];

fn encode(keyword: &str) -> String {
    let mut encoded = String::with_capacity(keyword.len());
    let mut buf = [0; 4];
    for c in keyword.chars() {
        if KEPT_MARKS.contains(&c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    encoded
}

pub const INIT: Endpoint = Endpoint::at("init", "/init/");
pub const LOGIN: Endpoint = Endpoint::at("login", "/token/")
    .post()
    .defaults(PUBLIC_APP)
    .raw()
    .options(CallOptions::LOCAL_ERRORS);
pub const FACEBOOK_LOGIN: Endpoint = Endpoint::at("facebook_login", "/facebook-login/")
    .post()
    .defaults(PUBLIC_APP)
    .raw()
    .options(CallOptions::LOCAL_ERRORS);
pub const AUTOLOGIN: Endpoint = Endpoint::at("autologin", "/autologin/")
    .post()
    .raw()
    .options(CallOptions::LOCAL_ERRORS);
pub const SIGNUP: Endpoint = Endpoint::at("signup", "/signup/")
    .post()
    .defaults(PUBLIC_APP)
    .raw()
    .options(CallOptions::LOCAL_ERRORS);
pub const FACEBOOK_SIGNUP: Endpoint = Endpoint::at("facebook_signup", "/facebook-signup/")
    .post()
    .defaults(PUBLIC_APP)
    .raw()
    .options(CallOptions::LOCAL_ERRORS);
pub const RESET_PASSWORD: Endpoint = Endpoint::at("resetPassword", "/reset_password/")
    .post()
    .defaults(PUBLIC_APP);
pub const FORGOT_PASSWORD: Endpoint = Endpoint::at("forgotPassword", "/forgot_password/")
    .post()
    .defaults(PUBLIC_APP);
pub const VALIDATE_INVITE: Endpoint =
    Endpoint::at("validateInvite", "/biodymanager/validate_invite/").post();
pub const CURRENT_USER: Endpoint = Endpoint::at("currentUser", "/current_user/");

/// Path of the token refresh exchange. Called outside the catalog, without
/// auth header or key conversion.
pub const TOKEN_REFRESH_PATH: &str = "/token/refresh";

pub mod taste {
    use super::{Endpoint, Id};

    pub const SAVE: Endpoint = Endpoint::at("taste.save", "/taste").post();
    pub const REMOVE: Endpoint<Id> =
        Endpoint::new("taste.remove", |taste: &Id| format!("/taste/{taste}")).delete();
}

pub mod user {
    use super::{Endpoint, Id};

    pub const NUTRIENT_PACKS: Endpoint<Id> = Endpoint::new("user.nutrientPacks", |user: &Id| {
        format!("/user/{user}/nutrient_packs")
    });
    pub const PLANIFICATION_STATUS: Endpoint<Id> =
        Endpoint::new("user.planificationStatus", |user: &Id| {
            format!("/user/{user}/planification_status")
        });
    pub const QUESTION_QUOTA: Endpoint<Id> = Endpoint::new("user.questionQuota", |user: &Id| {
        format!("/user/{user}/question_quota")
    });
    pub const STATS: Endpoint<Id> =
        Endpoint::new("user.stats", |user: &Id| format!("/user/{user}/stats"));
    pub const CHANGE_SETTINGS: Endpoint<Id> =
        Endpoint::new("user.changeSettings", |user: &Id| {
            format!("/user/{user}/change_settings")
        })
        .put();
    pub const CHANGE_PASSWORD: Endpoint<Id> =
        Endpoint::new("user.changePassword", |user: &Id| {
            format!("/user/{user}/change_password")
        })
        .put();
    pub const EMAIL_OPTIONS: Endpoint<Id> = Endpoint::new("user.emailOptions", |user: &Id| {
        format!("/user/{user}/email_options")
    });
    pub const ADD_USTENSIL: Endpoint<Id> = Endpoint::new("user.addUstensil", |user: &Id| {
        format!("/user/{user}/add_ustensil")
    })
    .post();
    pub const REMOVE_USTENSIL: Endpoint<Id> =
        Endpoint::new("user.removeUstensil", |user: &Id| {
            format!("/user/{user}/remove_ustensil")
        })
        .post();
    pub const PRECONFIGURE: Endpoint<Id> = Endpoint::new("user.preconfigure", |user: &Id| {
        format!("/user/{user}/preconfigure")
    })
    .post();
    pub const SET_EMAIL_OPTIONS: Endpoint<Id> =
        Endpoint::new("user.setEmailOptions", |user: &Id| {
            format!("/user/{user}/set_email_options")
        })
        .post();
    pub const ENABLE_NUTRIENT_PACK: Endpoint<Id> =
        Endpoint::new("user.enableNutrientPack", |user: &Id| {
            format!("/user/{user}/enable_nutrient_pack")
        })
        .post();
    pub const SUBSCRIBE_TO_DIET: Endpoint<(Id, Id)> =
        Endpoint::new("user.subscribeToDiet", |(user, diet): &(Id, Id)| {
            format!("/user/{user}/subscribe_to_diet/{diet}")
        })
        .post();
    pub const DIAGNOSE: Endpoint<(Id, Id)> =
        Endpoint::new("user.diagnose", |(user, diet): &(Id, Id)| {
            format!("/user/{user}/diagnose/{diet}")
        })
        .post();
}

pub mod user_day {
    use super::{Endpoint, Id, NaiveDate};

    pub const GET: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDay.get", |(user, date): &(Id, NaiveDate)| {
            format!("/user/{user}/day_to_fill/{date}")
        });
    pub const INDICATORS: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDay.indicators", |(user, date): &(Id, NaiveDate)| {
            format!("/user/{user}/day/{date}/indicators")
        });
    pub const STRUCTURE: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDay.structure", |(user, date): &(Id, NaiveDate)| {
            format!("/user/{user}/day/{date}/structure")
        });
    pub const SUGGEST: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDay.suggest", |(user, date): &(Id, NaiveDate)| {
            format!("/user/{user}/suggest/{date}")
        })
        .post();
    pub const SET_DISHRECIPE: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.setDishrecipe", |(user, dish): &(Id, Id)| {
            format!("/user/{user}/set_dishrecipe/{dish}")
        })
        .post();
    pub const NOT_NOW: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.notNow", |(user, recipe): &(Id, Id)| {
            format!("/user/{user}/not_now/{recipe}")
        })
        .post();
    pub const IMPROVE: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDay.improve", |(user, date): &(Id, NaiveDate)| {
            format!("/user/{user}/day/{date}/improve")
        })
        .post();
    pub const CLEAR_DISH: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.clearDish", |(user, dish): &(Id, Id)| {
            format!("/user/{user}/clear_dish/{dish}")
        })
        .post();
    pub const DELETE_DISH: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.deleteDish", |(user, dish): &(Id, Id)| {
            format!("/user/{user}/delete_dish/{dish}")
        })
        .post();
    pub const ADD_DISH: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.addDish", |(user, meal_slot): &(Id, Id)| {
            format!("/user/{user}/add_dish/{meal_slot}")
        })
        .post();
    pub const FORCE_AS_FILLED: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDay.forceAsFilled", |(user, date): &(Id, NaiveDate)| {
            format!("/user/{user}/day/{date}/force_as_filled")
        })
        .post();
    pub const VALIDATE_DISH: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.validateDish", |(user, dish): &(Id, Id)| {
            format!("/user/{user}/validate_dish/{dish}")
        })
        .post();
    pub const SET_MEAL_PLACE: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDay.setMealPlace", |(user, date): &(Id, NaiveDate)| {
            format!("/user/{user}/day/{date}/set_meal_place")
        })
        .post();
    pub const TOGGLE_DISH_ACTIVATION: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.toggleDishActivation", |(user, dish): &(Id, Id)| {
            format!("/user/{user}/toggle_dish_activation/{dish}")
        })
        .post();
    pub const TOGGLE_DISHRECIPE_SHOPPING: Endpoint<(Id, Id)> =
        Endpoint::new("userDay.toggleDishrecipeShopping", |(user, dish): &(Id, Id)| {
            format!("/user/{user}/toggle_dishrecipe_shopping/{dish}")
        })
        .post();
}

pub mod user_days {
    use super::{Endpoint, Id, NaiveDate};

    pub const GET: Endpoint<(Id, NaiveDate)> =
        Endpoint::new("userDays.get", |(user, day): &(Id, NaiveDate)| {
            format!("/user/{user}/menu/{day}")
        });
    pub const DAYS_STATES: Endpoint<Id> = Endpoint::new("userDays.daysStates", |user: &Id| {
        format!("/user/{user}/days_states")
    });
}

pub const PROFILES: Endpoint<Id> =
    Endpoint::new("profiles", |user: &Id| format!("/user/{user}/profile"));

pub mod profile {
    use super::{Endpoint, Id};

    pub const UPDATE: Endpoint<(Id, Id)> =
        Endpoint::new("profile.update", |(user, profile): &(Id, Id)| {
            format!("/user/{user}/profile/{profile}")
        })
        .put();
    pub const SAVE: Endpoint<Id> =
        Endpoint::new("profile.save", |user: &Id| format!("/user/{user}/profile")).post();
    pub const REMOVE: Endpoint<(Id, Id)> =
        Endpoint::new("profile.remove", |(user, profile): &(Id, Id)| {
            format!("/user/{user}/profile/{profile}")
        })
        .delete();
    pub const NB_DISLIKES: Endpoint<(Id, Id)> =
        Endpoint::new("profile.nbDislikes", |(user, profile): &(Id, Id)| {
            format!("/user/{user}/profile/{profile}/nb_dislikes")
        });
    pub const GET_DISLIKED_RECIPES: Endpoint<(Id, Id)> =
        Endpoint::new("profile.getDislikedRecipes", |(user, profile): &(Id, Id)| {
            format!("/user/{user}/profile/{profile}/get_disliked_recipes")
        });
    pub const METRIC_HISTORY: Endpoint<(Id, Id)> =
        Endpoint::new("profile.metricHistory", |(user, profile): &(Id, Id)| {
            format!("/user/{user}/profile/{profile}/metric_history")
        });
    pub const DISLIKE_RECIPE: Endpoint<(Id, Id)> =
        Endpoint::new("profile.dislikeRecipe", |(user, profile): &(Id, Id)| {
            format!("/user/{user}/profile/{profile}/dislike_recipe")
        })
        .post();
    pub const UPDATE_METRICS: Endpoint<(Id, Id)> =
        Endpoint::new("profile.updateMetrics", |(user, profile): &(Id, Id)| {
            format!("/user/{user}/profile/{profile}/update_metrics")
        })
        .post();
}

pub mod profile_attendance {
    use super::{Endpoint, Id};

    pub const GET: Endpoint<Id> = Endpoint::new("profileAttendance.get", |profile: &Id| {
        format!("/profile/{profile}/attendance")
    });
    pub const UPDATE: Endpoint<Id> = Endpoint::new("profileAttendance.update", |profile: &Id| {
        format!("/profile/{profile}/attendance")
    })
    .put();
}

pub mod user_habits {
    use super::{Endpoint, Id};

    pub const GET: Endpoint<Id> = Endpoint::new("userHabits.get", |user: &Id| {
        format!("/user/{user}/meal_types_habits")
    });
    pub const MEAL_TYPE_HABITS: Endpoint<(Id, Id)> =
        Endpoint::new("userHabits.mealTypeHabits", |(user, meal_type): &(Id, Id)| {
            format!("/user/{user}/meal_type/{meal_type}/habits")
        });
    pub const GET_BUDGET_PROTEINS: Endpoint<Id> =
        Endpoint::new("userHabits.getBudgetProteins", |user: &Id| {
            format!("/user/{user}/budget_proteins")
        });
    pub const SET_BUDGET_PROTEINS: Endpoint<Id> =
        Endpoint::new("userHabits.setBudgetProteins", |user: &Id| {
            format!("/user/{user}/set_budget_proteins")
        })
        .post();
    pub const ENABLE_MEAL_DISH: Endpoint<(Id, Id)> =
        Endpoint::new("userHabits.enableMealDish", |(user, meal_type): &(Id, Id)| {
            format!("/user/{user}/meal_type/{meal_type}/enable_meal_dish")
        })
        .post();
    pub const DISABLE_MEAL_DISH: Endpoint<(Id, Id)> =
        Endpoint::new("userHabits.disableMealDish", |(user, meal_type): &(Id, Id)| {
            format!("/user/{user}/meal_type/{meal_type}/disable_meal_dish")
        })
        .post();
    pub const FORCE_RECIPE: Endpoint<(Id, Id)> =
        Endpoint::new("userHabits.forceRecipe", |(user, meal_type): &(Id, Id)| {
            format!("/user/{user}/meal_type/{meal_type}/force_recipe")
        })
        .post();
    pub const SET_MEAL_SPEED: Endpoint<(Id, Id)> =
        Endpoint::new("userHabits.setMealSpeed", |(user, meal_type): &(Id, Id)| {
            format!("/user/{user}/meal_type/{meal_type}/set_meal_speed")
        })
        .post();
    pub const SET_SUGGEST: Endpoint<(Id, Id)> =
        Endpoint::new("userHabits.setSuggest", |(user, meal_type): &(Id, Id)| {
            format!("/user/{user}/meal_type/{meal_type}/set_suggest")
        })
        .post();
}

pub const RAW_STATES: Endpoint = Endpoint::at("rawStates", "/raw_state");
pub const RESTRICTED_FOODS: Endpoint<Id> = Endpoint::new("restrictedFoods", |profile: &Id| {
    format!("/restricted_food?profile_id={profile}")
});
pub const CONFIG_STAGE: Endpoint<Id> =
    Endpoint::new("configStage", |user: &Id| format!("/config_stage?user_id={user}"));
pub const COMPLETE_STAGE: Endpoint<Id> = Endpoint::new("completeStage", |user: &Id| {
    format!("/user/{user}/config_stages/complete")
})
.post();
pub const ACTIVATE_FREE_TRIAL: Endpoint<Id> = Endpoint::new("activateFreeTrial", |user: &Id| {
    format!("/user/{user}/activate_free_trial")
})
.post();
pub const TASTES: Endpoint<(Id, bool)> =
    Endpoint::new("tastes", |(profile, nested): &(Id, bool)| {
        format!("/taste?profile_id={profile}&nested={nested}")
    });
pub const DIETS: Endpoint = Endpoint::at("diets", "/diet");

pub mod diet {
    use super::{Endpoint, Id};

    pub const EXCLUDED_FOODTAGS: Endpoint<Id> =
        Endpoint::new("diet.excludedFoodtags", |diet: &Id| {
            format!("/diet/{diet}/excluded_foodtags")
        });
    pub const FOREWARNED_FOODTAGS: Endpoint<Id> =
        Endpoint::new("diet.forewarnedFoodtags", |diet: &Id| {
            format!("/diet/{diet}/forewarned_foodtags")
        });
}

pub const EATERS: Endpoint<Id> =
    Endpoint::new("eaters", |user: &Id| format!("/user/{user}/eater"));

pub mod food {
    use super::{Endpoint, Id};

    pub const AVAILABLE_OPTIONS: Endpoint<Id> =
        Endpoint::new("food.availableOptions", |food: &Id| {
            format!("/food/{food}/available_options")
        });
}

pub mod food_conversion {
    use super::{Endpoint, Id};

    pub const SEARCH_BY_FOOD: Endpoint<Id> =
        Endpoint::new("foodConversion.searchByFood", |food: &Id| {
            format!("/food_conversion?food_id={food}")
        });
}

// No leading slash: the server contract has it this way.
pub const FOOD_TAGS: Endpoint = Endpoint::at("foodTags", "food_tag");
pub const FOOD_SEARCH: Endpoint<String> = Endpoint::new("foodSearch", |keyword: &String| {
    format!("/food/search/{}", encode(keyword))
})
.options(CallOptions::CACHED);
pub const FOOD_TAG_SEARCH: Endpoint<String> =
    Endpoint::new("foodTagSearch", |keyword: &String| {
        format!("/food_tag/search/{}", encode(keyword))
    })
    .options(CallOptions::CACHED);
pub const RECIPE_SEARCH: Endpoint<String> = Endpoint::new("recipeSearch", |keyword: &String| {
    format!("/recipe/search/{}", encode(keyword))
});
pub const RECIPE_IMG_UPLOAD: Endpoint<Id> = Endpoint::new("recipeImgUpload", |recipe: &Id| {
    format!("/recipe/{recipe}/upload_img")
})
.post();
pub const TARIFFS: Endpoint = Endpoint::at("tariffs", "/tariffs/");
pub const USTENSILS: Endpoint = Endpoint::at("ustensils", "/ustensil");
pub const USTENSIL_CATEGORIES: Endpoint = Endpoint::at("ustensilCategories", "/ustensil_category");

pub mod shopping_list {
    use super::{Endpoint, Id};

    pub const GET: Endpoint<(Id, Id)> =
        Endpoint::new("shoppingList.get", |(user, list): &(Id, Id)| {
            format!("/user/{user}/shopping_list/{list}")
        });
    pub const FLY_MENU_ITEMS: Endpoint<(Id, Id)> =
        Endpoint::new("shoppingList.flyMenuItems", |(user, list): &(Id, Id)| {
            format!("/user/{user}/shopping_list/{list}/fly_menu_items")
        });
    pub const AVAILABLE_DAYS: Endpoint<Id> =
        Endpoint::new("shoppingList.availableDays", |user: &Id| {
            format!("/user/{user}/shopping_list/available_days")
        });
    pub const HISTORY: Endpoint<Id> = Endpoint::new("shoppingList.history", |user: &Id| {
        format!("/user/{user}/shopping_list/history")
    });
    pub const BUILD_NEW: Endpoint<Id> = Endpoint::new("shoppingList.buildNew", |user: &Id| {
        format!("/user/{user}/shopping_list/build_new")
    })
    .post();
    pub const TOGGLE_ITEM: Endpoint<(Id, Id)> =
        Endpoint::new("shoppingList.toggleItem", |(user, item): &(Id, Id)| {
            format!("/user/{user}/shopping_list/toggle_item/{item}")
        })
        .post();
    pub const SEND_BY_MAIL: Endpoint<(Id, Id)> =
        Endpoint::new("shoppingList.sendByMail", |(user, list): &(Id, Id)| {
            format!("/user/{user}/shopping_list/{list}/send_by_mail")
        })
        .post();
    pub const REMOVE: Endpoint<(Id, Id)> =
        Endpoint::new("shoppingList.remove", |(user, list): &(Id, Id)| {
            format!("/user/{user}/shopping_list/{list}/delete")
        })
        .post();
}

pub mod shopping_item {
    use super::{Endpoint, Id};

    pub const SAVE: Endpoint = Endpoint::at("shoppingItem.save", "/shopping_item").post();
    pub const REMOVE: Endpoint<Id> = Endpoint::new("shoppingItem.remove", |item: &Id| {
        format!("/shopping_item/{item}")
    })
    .delete();
    pub const FORCE: Endpoint<Id> = Endpoint::new("shoppingItem.force", |item: &Id| {
        format!("/shopping_item/{item}/force")
    })
    .put();
}

pub mod discussion {
    use super::{Endpoint, Id};

    pub const GET: Endpoint<Id> =
        Endpoint::new("discussion.get", |discussion: &Id| format!("/discussion/{discussion}"));
    pub const SAVE: Endpoint = Endpoint::at("discussion.save", "/discussion").post();
    pub const READ: Endpoint<Id> = Endpoint::new("discussion.read", |discussion: &Id| {
        format!("/discussion/{discussion}/read")
    })
    .post();
}

pub mod message {
    use super::{Endpoint, Id};

    pub const GET: Endpoint<Id> =
        Endpoint::new("message.get", |message: &Id| format!("/message/{message}"));
    pub const UPDATE: Endpoint<Id> =
        Endpoint::new("message.update", |message: &Id| format!("/message/{message}")).put();
    pub const SAVE: Endpoint = Endpoint::at("message.save", "/message").post();
}

pub const COOKBOOK_RECIPES: Endpoint<Id> = Endpoint::new("cookbookRecipes", |user: &Id| {
    format!("/user/{user}/cookbook_recipe")
});

pub mod cookbook_recipe {
    use super::{Endpoint, Id};

    pub const SAVE: Endpoint<Id> = Endpoint::new("cookbookRecipe.save", |user: &Id| {
        format!("/user/{user}/cookbook_recipe")
    })
    .post();
    pub const DELETE_BY_RECIPE_ID: Endpoint<Id> =
        Endpoint::new("cookbookRecipe.deleteByRecipeId", |user: &Id| {
            format!("/user/{user}/cookbook_recipe/delete_by_recipe_id")
        })
        .post();
}

pub mod cooking_method {
    use super::{Endpoint, Id};

    pub const FOOD: Endpoint<Id> =
        Endpoint::new("cookingMethod.food", |food: &Id| format!("/cooking_method/food/{food}"));
}

pub const RECIPES: Endpoint = Endpoint::at("recipes", "/recipe");

pub mod recipe {
    use super::{CallOptions, Endpoint, Id};

    pub const GET: Endpoint<Id> =
        Endpoint::new("recipe.get", |recipe: &Id| format!("/recipe/{recipe}"));
    pub const UPDATE: Endpoint<Id> =
        Endpoint::new("recipe.update", |recipe: &Id| format!("/recipe/{recipe}")).put();
    pub const GET_MANY: Endpoint = Endpoint::at("recipe.getMany", "/recipe/get_many");
    pub const FROM_KEY: Endpoint<String> =
        Endpoint::new("recipe.fromKey", |key: &String| format!("/recipe/from_key/{key}"));
    pub const GET_SUGGESTED_FOOD_TAGS: Endpoint<Id> =
        Endpoint::new("recipe.getSuggestedFoodTags", |recipe: &Id| {
            format!("/recipe/{recipe}/get_suggested_food_tags")
        });
    pub const SAVE: Endpoint = Endpoint::at("recipe.save", "/recipe").post();
    pub const REMOVE: Endpoint<Id> =
        Endpoint::new("recipe.remove", |recipe: &Id| format!("/recipe/{recipe}")).delete();
    pub const PERSONAL_RECIPES: Endpoint<Id> =
        Endpoint::new("recipe.personalRecipes", |user: &Id| {
            format!("/user/{user}/personal_recipes?ids_only=true")
        });
    pub const WITH_INGREDIENTS: Endpoint<Id> =
        Endpoint::new("recipe.withIngredients", |recipe: &Id| {
            format!("/recipe/{recipe}/with_ingredients")
        });
    pub const NUTRIENTS: Endpoint<Id> =
        Endpoint::new("recipe.nutrients", |recipe: &Id| format!("/recipe/{recipe}/nutrients"));
    pub const RATINGS: Endpoint<Id> =
        Endpoint::new("recipe.ratings", |recipe: &Id| format!("/recipe/{recipe}/ratings"));
    pub const USER_RATING: Endpoint<Id> = Endpoint::new("recipe.userRating", |recipe: &Id| {
        format!("/recipe/{recipe}/user_rating")
    });
    pub const RANDOM_SEASON_SELECTION: Endpoint = Endpoint::at(
        "recipe.randomSeasonSelection",
        "/recipe/random_season_selection",
    )
    .options(CallOptions::CACHED);
    pub const RATE: Endpoint<Id> =
        Endpoint::new("recipe.rate", |recipe: &Id| format!("/recipe/{recipe}/rate")).post();
    pub const ADD_USTENSIL: Endpoint<Id> = Endpoint::new("recipe.addUstensil", |recipe: &Id| {
        format!("/recipe/{recipe}/add_ustensil")
    })
    .post();
    pub const REMOVE_USTENSIL: Endpoint<Id> =
        Endpoint::new("recipe.removeUstensil", |recipe: &Id| {
            format!("/recipe/{recipe}/remove_ustensil")
        })
        .post();
    pub const ADD_TAG: Endpoint<Id> =
        Endpoint::new("recipe.addTag", |recipe: &Id| format!("/recipe/{recipe}/add_tag")).post();
    pub const REMOVE_TAG: Endpoint<Id> = Endpoint::new("recipe.removeTag", |recipe: &Id| {
        format!("/recipe/{recipe}/remove_tag")
    })
    .post();
    pub const ADD_DISH_TYPE: Endpoint<Id> = Endpoint::new("recipe.addDishType", |recipe: &Id| {
        format!("/recipe/{recipe}/add_dish_type")
    })
    .post();
    pub const REMOVE_DISH_TYPE: Endpoint<Id> =
        Endpoint::new("recipe.removeDishType", |recipe: &Id| {
            format!("/recipe/{recipe}/remove_dish_type")
        })
        .post();
}

pub mod recipe_instruction {
    use super::{Endpoint, Id};

    pub const SAVE: Endpoint = Endpoint::at("recipeInstruction.save", "/recipe_instruction").post();
    pub const UPDATE: Endpoint<Id> =
        Endpoint::new("recipeInstruction.update", |instruction: &Id| {
            format!("/recipe_instruction/{instruction}")
        })
        .put();
    pub const REMOVE: Endpoint<Id> =
        Endpoint::new("recipeInstruction.remove", |instruction: &Id| {
            format!("/recipe_instruction/{instruction}")
        })
        .delete();
}

pub const RECIPE_TAGS: Endpoint = Endpoint::at("recipeTags", "/recipe_tag");
pub const DISH_TYPES: Endpoint = Endpoint::at("dishTypes", "/dish_type");

pub mod dish_type {
    use super::{Endpoint, Id};

    pub const FROM_MEAL_TYPE: Endpoint<Id> =
        Endpoint::new("dishType.fromMealType", |meal_type: &Id| {
            format!("/dish_type/from_meal_type/{meal_type}")
        });
}

pub mod ingredient {
    use super::{Endpoint, Id};

    pub const SAVE: Endpoint = Endpoint::at("ingredient.save", "/ingredient").post();
    pub const UPDATE: Endpoint<Id> =
        Endpoint::new("ingredient.update", |ingredient: &Id| format!("/ingredient/{ingredient}"))
            .put();
    pub const REMOVE: Endpoint<Id> =
        Endpoint::new("ingredient.remove", |ingredient: &Id| format!("/ingredient/{ingredient}"))
            .delete();
}

pub const MEAL_PLACES: Endpoint = Endpoint::at("mealPlaces", "/meal_place");
pub const LOCATIONS: Endpoint = Endpoint::at("locations", "/location?tree=1");
pub const NUTRIENTS: Endpoint = Endpoint::at("nutrients", "/nutrient");
pub const NUTRIENT_CATEGORIES: Endpoint = Endpoint::at("nutrientCategories", "/nutrient_categories");
pub const DISCUSSIONS: Endpoint = Endpoint::at("discussions", "/discussion");

pub mod meal_sharing {
    use super::{Endpoint, Id};

    pub const GET: Endpoint<Id> = Endpoint::new("mealSharing.get", |planning: &Id| {
        format!("/planning/{planning}/attendance")
    });
    pub const UPDATE: Endpoint<Id> = Endpoint::new("mealSharing.update", |planning: &Id| {
        format!("/planning/{planning}/attendance")
    })
    .put();
}

pub mod meal_slot {
    use super::{Endpoint, Id};

    pub const EXTERNAL_SUGGEST: Endpoint<Id> =
        Endpoint::new("mealSlot.externalSuggest", |meal_slot: &Id| {
            format!("/meal_slot/{meal_slot}/external_suggest")
        });
    pub const SET_SPEED: Endpoint<Id> = Endpoint::new("mealSlot.setSpeed", |meal_slot: &Id| {
        format!("/meal_slot/{meal_slot}/set_speed")
    })
    .post();
    pub const ADD_EATER: Endpoint<Id> = Endpoint::new("mealSlot.addEater", |meal_slot: &Id| {
        format!("/meal_slot/{meal_slot}/add_eater")
    })
    .post();
    pub const REMOVE_EATER: Endpoint<Id> =
        Endpoint::new("mealSlot.removeEater", |meal_slot: &Id| {
            format!("/meal_slot/{meal_slot}/remove_eater")
        })
        .post();
}
