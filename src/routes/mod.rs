use actix_web::web;

pub mod department;
pub mod employee;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/api")
            .service(department::list::list_departments)
            .service(department::create::create_department)
            .service(
                web::scope("/department")
                    .service(department::delete::delete_department)
                    .service(employee::add::add_employee)
                    .service(employee::list::list_employees)
                    .service(employee::get::get_employee)
                    .service(employee::update::update_employee)
                    .service(employee::status::update_status),
            )
            .service(web::scope("/employee").service(employee::move_employee::move_employee)),
    );
}
