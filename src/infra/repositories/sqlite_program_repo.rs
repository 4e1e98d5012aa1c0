use crate::domain::{
    models::program::{
        DietAssignment, DietMeal, DietPlan, Trainer, Workout, WorkoutAssignment, WorkoutExercise,
    },
    ports::ProgramRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProgramRepo {
    pool: SqlitePool,
}

impl SqliteProgramRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramRepository for SqliteProgramRepo {
    async fn create_trainer(&self, trainer: &Trainer) -> Result<Trainer, AppError> {
        sqlx::query_as::<_, Trainer>(
            "INSERT INTO trainers (id, gym_id, name, specialization, photo, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&trainer.id)
            .bind(&trainer.gym_id)
            .bind(&trainer.name)
            .bind(&trainer.specialization)
            .bind(&trainer.photo)
            .bind(trainer.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_trainers(&self, gym_id: &str) -> Result<Vec<Trainer>, AppError> {
        sqlx::query_as::<_, Trainer>(
            "SELECT id, gym_id, name, specialization, photo, created_at FROM trainers WHERE gym_id = ? ORDER BY name",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_diet_plan(&self, plan: &DietPlan, meals: &[DietMeal]) -> Result<DietPlan, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, DietPlan>(
            "INSERT INTO diet_plans (id, gym_id, name, trainer_id, category, diet_goal, diet_type, target_calories, duration_days, description, thumbnail, water_intake, supplements_json, special_instructions, macros_calories, macros_protein, macros_carbs, macros_fat, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&plan.id)
            .bind(&plan.gym_id)
            .bind(&plan.name)
            .bind(&plan.trainer_id)
            .bind(&plan.category)
            .bind(&plan.diet_goal)
            .bind(&plan.diet_type)
            .bind(plan.target_calories)
            .bind(plan.duration_days)
            .bind(&plan.description)
            .bind(&plan.thumbnail)
            .bind(plan.water_intake)
            .bind(&plan.supplements_json)
            .bind(&plan.special_instructions)
            .bind(plan.macros_calories)
            .bind(plan.macros_protein)
            .bind(plan.macros_carbs)
            .bind(plan.macros_fat)
            .bind(plan.created_at)
            .bind(plan.updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for meal in meals {
            sqlx::query(
                "INSERT INTO diet_meals (id, diet_plan_id, meal_time, items_json) VALUES (?, ?, ?, ?)",
            )
                .bind(&meal.id)
                .bind(&meal.diet_plan_id)
                .bind(&meal.meal_time)
                .bind(&meal.items_json)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_diet_plan(&self, gym_id: &str, id: &str) -> Result<Option<DietPlan>, AppError> {
        sqlx::query_as::<_, DietPlan>(
            "SELECT * FROM diet_plans WHERE gym_id = ? AND id = ?",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_diet_plans(&self, gym_id: &str) -> Result<Vec<DietPlan>, AppError> {
        sqlx::query_as::<_, DietPlan>(
            "SELECT * FROM diet_plans WHERE gym_id = ? ORDER BY created_at DESC",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_meals(&self, diet_plan_id: &str) -> Result<Vec<DietMeal>, AppError> {
        sqlx::query_as::<_, DietMeal>(
            "SELECT id, diet_plan_id, meal_time, items_json FROM diet_meals WHERE diet_plan_id = ?",
        )
            .bind(diet_plan_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_diet_plan(&self, plan: &DietPlan) -> Result<DietPlan, AppError> {
        sqlx::query_as::<_, DietPlan>(
            "UPDATE diet_plans SET name=?, trainer_id=?, category=?, diet_goal=?, diet_type=?, target_calories=?, duration_days=?, description=?, thumbnail=?, water_intake=?, supplements_json=?, special_instructions=?, macros_calories=?, macros_protein=?, macros_carbs=?, macros_fat=?, updated_at=? WHERE id=? AND gym_id=? RETURNING *",
        )
            .bind(&plan.name)
            .bind(&plan.trainer_id)
            .bind(&plan.category)
            .bind(&plan.diet_goal)
            .bind(&plan.diet_type)
            .bind(plan.target_calories)
            .bind(plan.duration_days)
            .bind(&plan.description)
            .bind(&plan.thumbnail)
            .bind(plan.water_intake)
            .bind(&plan.supplements_json)
            .bind(&plan.special_instructions)
            .bind(plan.macros_calories)
            .bind(plan.macros_protein)
            .bind(plan.macros_carbs)
            .bind(plan.macros_fat)
            .bind(plan.updated_at)
            .bind(&plan.id)
            .bind(&plan.gym_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete_diet_plan(&self, gym_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM diet_plans WHERE id = ? AND gym_id = ?")
            .bind(id)
            .bind(gym_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Diet plan not found".into()));
        }
        Ok(())
    }

    async fn create_workout(&self, workout: &Workout, exercises: &[WorkoutExercise]) -> Result<Workout, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Workout>(
            "INSERT INTO workouts (id, gym_id, name, trainer_id, body_part, difficulty, equipment, duration_min, thumbnail, video_url, usage_count, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&workout.id)
            .bind(&workout.gym_id)
            .bind(&workout.name)
            .bind(&workout.trainer_id)
            .bind(&workout.body_part)
            .bind(&workout.difficulty)
            .bind(&workout.equipment)
            .bind(workout.duration_min)
            .bind(&workout.thumbnail)
            .bind(&workout.video_url)
            .bind(workout.usage_count)
            .bind(workout.created_at)
            .bind(workout.updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for exercise in exercises {
            sqlx::query(
                "INSERT INTO workout_exercises (id, workout_id, name, sets, reps, rest, notes, order_index) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
                .bind(&exercise.id)
                .bind(&exercise.workout_id)
                .bind(&exercise.name)
                .bind(exercise.sets)
                .bind(&exercise.reps)
                .bind(&exercise.rest)
                .bind(&exercise.notes)
                .bind(exercise.order_index)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_workout(&self, gym_id: &str, id: &str) -> Result<Option<Workout>, AppError> {
        sqlx::query_as::<_, Workout>(
            "SELECT * FROM workouts WHERE gym_id = ? AND id = ?",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_workouts(&self, gym_id: &str) -> Result<Vec<Workout>, AppError> {
        sqlx::query_as::<_, Workout>(
            "SELECT * FROM workouts WHERE gym_id = ? ORDER BY created_at DESC",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_exercises(&self, workout_id: &str) -> Result<Vec<WorkoutExercise>, AppError> {
        sqlx::query_as::<_, WorkoutExercise>(
            "SELECT id, workout_id, name, sets, reps, rest, notes, order_index FROM workout_exercises WHERE workout_id = ? ORDER BY order_index",
        )
            .bind(workout_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_workout(&self, workout: &Workout) -> Result<Workout, AppError> {
        sqlx::query_as::<_, Workout>(
            "UPDATE workouts SET name=?, trainer_id=?, body_part=?, difficulty=?, equipment=?, duration_min=?, thumbnail=?, video_url=?, updated_at=? WHERE id=? AND gym_id=? RETURNING *",
        )
            .bind(&workout.name)
            .bind(&workout.trainer_id)
            .bind(&workout.body_part)
            .bind(&workout.difficulty)
            .bind(&workout.equipment)
            .bind(workout.duration_min)
            .bind(&workout.thumbnail)
            .bind(&workout.video_url)
            .bind(workout.updated_at)
            .bind(&workout.id)
            .bind(&workout.gym_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete_workout(&self, gym_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ? AND gym_id = ?")
            .bind(id)
            .bind(gym_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Workout not found".into()));
        }
        Ok(())
    }

    async fn assign_diet(&self, assignment: &DietAssignment) -> Result<DietAssignment, AppError> {
        sqlx::query_as::<_, DietAssignment>(
            "INSERT INTO diet_assignments (id, diet_plan_id, member_id, start_date, end_date, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&assignment.id)
            .bind(&assignment.diet_plan_id)
            .bind(&assignment.member_id)
            .bind(assignment.start_date)
            .bind(assignment.end_date)
            .bind(&assignment.status)
            .bind(assignment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn assign_workout(&self, assignment: &WorkoutAssignment) -> Result<WorkoutAssignment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, WorkoutAssignment>(
            "INSERT INTO workout_assignments (id, workout_id, member_id, assigned_at, status) VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&assignment.id)
            .bind(&assignment.workout_id)
            .bind(&assignment.member_id)
            .bind(assignment.assigned_at)
            .bind(&assignment.status)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("UPDATE workouts SET usage_count = usage_count + 1 WHERE id = ?")
            .bind(&assignment.workout_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list_diet_assignments(&self, member_id: &str) -> Result<Vec<DietAssignment>, AppError> {
        sqlx::query_as::<_, DietAssignment>(
            "SELECT id, diet_plan_id, member_id, start_date, end_date, status, created_at FROM diet_assignments WHERE member_id = ? ORDER BY created_at DESC",
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_workout_assignments(&self, member_id: &str) -> Result<Vec<WorkoutAssignment>, AppError> {
        sqlx::query_as::<_, WorkoutAssignment>(
            "SELECT id, workout_id, member_id, assigned_at, status FROM workout_assignments WHERE member_id = ? ORDER BY assigned_at DESC",
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
